//! Declaration extraction
//!
//! Locates the import declarations of a Go file, reads every spec into a
//! [`Declaration`] that owns its comments, and records where the untouched
//! text before and after the import region begins and ends.
//!
//! Comment attachment works on a flat, source-ordered stream of events
//! (declaration opens, specs, comments, block closes) so that grouped blocks,
//! standalone statements and any mix of the two go through the same rules:
//!
//! - a comment starting on the line a spec ends on is that spec's trailing comment
//! - a run of comments ending on the line right above a spec is its doc comment
//! - a run directly above the first `import (` stays above the block
//! - anything else inside the region is dangling and dropped

use crate::error::{ParseError, ParseResult};
use crate::parsing::Declaration;
use crate::parsing::go::parser::{
    GoParser, contains_import_keyword, error_at, read_import_spec, syntax_error, syntax_errors,
};
use tracing::debug;
use tree_sitter::{Node, Tree};

/// One file's text and parse tree plus the structural anchors of its import region.
pub struct FileSnapshot<'a> {
    source: &'a str,
    tree: Tree,
    region: Option<ImportRegion>,
}

/// The part of a file occupied by import declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRegion {
    /// End of the preserved text before the region, trailing whitespace excluded
    pub head_end: usize,
    /// Start of the preserved text after the region, leading whitespace excluded
    pub tail_start: usize,
    /// Comments directly above the first `import (` keyword
    pub block_doc: Vec<String>,
    /// Specs in source order
    pub declarations: Vec<Declaration>,
}

impl<'a> FileSnapshot<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// `None` when the file has no import declarations.
    pub fn region(&self) -> Option<&ImportRegion> {
        self.region.as_ref()
    }

    pub fn head(&self) -> &'a str {
        match &self.region {
            Some(region) => &self.source[..region.head_end],
            None => self.source,
        }
    }

    pub fn tail(&self) -> &'a str {
        match &self.region {
            Some(region) => &self.source[region.tail_start..],
            None => "",
        }
    }
}

/// Parse `source` and extract its import declarations.
pub fn extract(source: &str) -> ParseResult<FileSnapshot<'_>> {
    let mut parser = GoParser::new()?;
    let tree = parser.parse(source)?;
    let region = scan(tree.root_node(), source)?;
    Ok(FileSnapshot {
        source,
        tree,
        region,
    })
}

fn scan(root: Node, code: &str) -> ParseResult<Option<ImportRegion>> {
    let mut cursor = root.walk();
    let top: Vec<Node> = root.named_children(&mut cursor).collect();

    let imports: Vec<Node> = top
        .iter()
        .copied()
        .filter(|n| n.kind() == "import_declaration")
        .collect();

    let Some(package) = top.iter().copied().find(|n| n.kind() == "package_clause") else {
        if let Some(error) = import_errors(root, usize::MAX).into_iter().next() {
            return Err(syntax_error(error, code));
        }
        return Err(ParseError::MissingPackageClause);
    };

    let limit = imports
        .last()
        .map(|n| line_end(code, n.end_byte()))
        .unwrap_or_else(|| package.end_byte());
    if let Some(error) = import_errors(root, limit).into_iter().next() {
        return Err(syntax_error(error, code));
    }
    check_ordering(&top, package)?;

    let (Some(first), Some(last)) = (imports.first().copied(), imports.last().copied()) else {
        return Ok(None);
    };
    check_no_statements(&top, last)?;

    let top_comments: Vec<Node> = top
        .iter()
        .copied()
        .filter(|n| n.kind() == "comment" && n.start_byte() >= package.end_byte())
        .collect();

    // Doc run directly above the first declaration
    let mut leading: Vec<Node> = Vec::new();
    let mut expected_row = first.start_position().row;
    for comment in top_comments
        .iter()
        .rev()
        .filter(|c| c.end_byte() <= first.start_byte())
    {
        let owned = comment.end_position().row + 1 == expected_row
            && comment.start_position().row > package.end_position().row;
        if !owned {
            break;
        }
        expected_row = comment.start_position().row;
        leading.push(*comment);
    }
    leading.reverse();

    let last_row = last.end_position().row;
    let inner_comments = top_comments.iter().copied().filter(|c| {
        (c.start_byte() > first.end_byte() && c.end_byte() <= last.start_byte())
            || (c.start_byte() >= last.end_byte() && c.start_position().row == last_row)
    });

    let mut events: Vec<(usize, Event)> = Vec::new();
    for comment in leading.iter().copied().chain(inner_comments) {
        events.push((comment.start_byte(), Event::comment(comment, code)));
    }
    for declaration in &imports {
        collect_declaration_events(*declaration, code, &mut events);
    }
    events.sort_by_key(|(offset, _)| *offset);

    let region_start = leading
        .first()
        .map(|c| c.start_byte())
        .unwrap_or_else(|| first.start_byte());
    let region_end = top_comments
        .iter()
        .filter(|c| c.start_byte() >= last.end_byte() && c.start_position().row == last_row)
        .map(|c| c.end_byte())
        .fold(last.end_byte(), usize::max);

    let head_end = code[..region_start].trim_end().len();
    let rest = &code[region_end..];
    let separator = rest.len()
        - rest
            .trim_start_matches(|c: char| c.is_whitespace() || c == ';')
            .len();
    let tail_start = region_end + separator;

    let mut assembler = Assembler::default();
    for (_, event) in events {
        assembler.feed(event);
    }
    let (block_doc, declarations) = assembler.finish();

    Ok(Some(ImportRegion {
        head_end,
        tail_start,
        block_doc,
        declarations,
    }))
}

fn line_end(code: &str, offset: usize) -> usize {
    code[offset..]
        .find('\n')
        .map_or(code.len(), |newline| offset + newline)
}

/// Syntax errors that make the import section unreadable: anything starting
/// before `limit`, and any error that swallowed an `import` keyword.
fn import_errors(root: Node, limit: usize) -> Vec<Node> {
    let mut errors = syntax_errors(root);
    errors.retain(|e| e.start_byte() <= limit || contains_import_keyword(*e));
    errors
}

/// Imports must come right after the package clause, before any other declaration.
fn check_ordering(top: &[Node], package: Node) -> ParseResult<()> {
    let mut other_seen = false;
    for node in top {
        match node.kind() {
            "import_declaration" if other_seen || node.start_byte() < package.start_byte() => {
                return Err(error_at(
                    *node,
                    "imports must appear before other declarations",
                ));
            }
            "package_clause" | "comment" | "import_declaration" => {}
            _ => other_seen = true,
        }
    }
    Ok(())
}

/// Statements are not valid at file scope. The grammar still accepts them, so
/// one sharing a line with the last import (`import "fmt" "os"`) has to be
/// rejected here rather than left behind in the tail.
fn check_no_statements(top: &[Node], last: Node) -> ParseResult<()> {
    let last_row = last.end_position().row;
    match top
        .iter()
        .find(|n| is_statement(**n) && n.start_position().row <= last_row)
    {
        Some(node) => Err(error_at(*node, "unexpected statement in import section")),
        None => Ok(()),
    }
}

fn is_statement(node: Node) -> bool {
    let kind = node.kind();
    kind.ends_with("_statement") || matches!(kind, "block" | "short_var_declaration")
}

#[derive(Debug)]
enum Event {
    Open {
        block: bool,
        row: usize,
        paren_row: usize,
    },
    Spec {
        declaration: Declaration,
        start_row: usize,
        end_row: usize,
    },
    Comment(CommentLine),
    Close {
        row: usize,
    },
}

impl Event {
    fn comment(node: Node, code: &str) -> Self {
        Event::Comment(CommentLine {
            text: code[node.byte_range()].trim_end().to_string(),
            start_row: node.start_position().row,
            end_row: node.end_position().row,
        })
    }
}

#[derive(Debug, Clone)]
struct CommentLine {
    text: String,
    start_row: usize,
    end_row: usize,
}

fn collect_declaration_events(node: Node, code: &str, events: &mut Vec<(usize, Event)>) {
    let row = node.start_position().row;
    let mut cursor = node.walk();
    let list = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "import_spec_list");

    match list {
        Some(list) => {
            let mut cursor = list.walk();
            let tokens: Vec<Node> = list.children(&mut cursor).collect();
            let paren_row = tokens
                .iter()
                .find(|t| t.kind() == "(")
                .map(|t| t.start_position().row)
                .unwrap_or(row);
            events.push((
                node.start_byte(),
                Event::Open {
                    block: true,
                    row,
                    paren_row,
                },
            ));
            if let Some(close) = tokens.iter().rev().find(|t| t.kind() == ")") {
                events.push((
                    close.start_byte(),
                    Event::Close {
                        row: close.start_position().row,
                    },
                ));
            }
        }
        None => events.push((
            node.start_byte(),
            Event::Open {
                block: false,
                row,
                paren_row: row,
            },
        )),
    }

    collect_specs_and_comments(node, code, events);
}

fn collect_specs_and_comments(node: Node, code: &str, events: &mut Vec<(usize, Event)>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => {
                let Some(declaration) = read_import_spec(child, code) else {
                    continue;
                };
                let first = child
                    .child_by_field_name("name")
                    .or_else(|| child.child_by_field_name("path"))
                    .unwrap_or(child);
                let end = child.child_by_field_name("path").unwrap_or(child);
                events.push((
                    first.start_byte(),
                    Event::Spec {
                        declaration,
                        start_row: first.start_position().row,
                        end_row: end.end_position().row,
                    },
                ));
                collect_specs_and_comments(child, code, events);
            }
            "comment" => events.push((child.start_byte(), Event::comment(child, code))),
            _ => collect_specs_and_comments(child, code, events),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    row: usize,
    spec: Option<usize>,
}

#[derive(Debug, Default)]
struct Assembler {
    declarations: Vec<Declaration>,
    block_doc: Vec<String>,
    pending: Vec<CommentLine>,
    carry: Vec<String>,
    anchor: Option<Anchor>,
    opened: bool,
    standalone: bool,
}

impl Assembler {
    fn feed(&mut self, event: Event) {
        match event {
            Event::Comment(comment) => {
                if let Some(anchor) = self.anchor.filter(|a| a.row == comment.start_row) {
                    match anchor.spec {
                        Some(index) => self.declarations[index].attach_trailing(&comment.text),
                        None => debug!("dropping comment on import delimiter line: {}", comment.text),
                    }
                    return;
                }
                let detached = self
                    .pending
                    .last()
                    .is_some_and(|last| comment.start_row > last.end_row + 1);
                if detached {
                    self.drop_pending();
                }
                self.pending.push(comment);
                self.anchor = None;
            }
            Event::Open {
                block,
                row,
                paren_row,
            } => {
                let doc = self.take_doc_for(row);
                if block && !self.opened {
                    self.block_doc = doc;
                } else {
                    self.carry = doc;
                }
                self.anchor = block.then_some(Anchor {
                    row: paren_row,
                    spec: None,
                });
                self.opened = true;
                self.standalone = !block;
            }
            Event::Spec {
                mut declaration,
                start_row,
                end_row,
            } => {
                let mut doc = std::mem::take(&mut self.carry);
                doc.extend(self.take_doc_for(start_row));
                declaration.doc = doc;
                declaration.standalone = self.standalone;
                self.declarations.push(declaration);
                self.anchor = Some(Anchor {
                    row: end_row,
                    spec: Some(self.declarations.len() - 1),
                });
            }
            Event::Close { row } => {
                self.drop_pending();
                if !self.carry.is_empty() {
                    debug!("dropping doc comment of empty import block");
                    self.carry.clear();
                }
                self.anchor = Some(Anchor { row, spec: None });
            }
        }
    }

    /// Pending comments become the doc of whatever starts on `row` when the run
    /// ends on the line right above it; otherwise they are dangling.
    fn take_doc_for(&mut self, row: usize) -> Vec<String> {
        let attached = self.pending.last().is_some_and(|last| last.end_row + 1 == row);
        if attached {
            self.pending.drain(..).map(|c| c.text).collect()
        } else {
            self.drop_pending();
            Vec::new()
        }
    }

    fn drop_pending(&mut self) {
        for comment in self.pending.drain(..) {
            debug!("dropping dangling import comment: {}", comment.text);
        }
    }

    fn finish(mut self) -> (Vec<String>, Vec<Declaration>) {
        self.drop_pending();
        (self.block_doc, self.declarations)
    }
}
