//! Go parser implementation
//!
//! Uses tree-sitter-go crate’s LANGUAGE constant (converted via .into()).
//!
//! Note: This parser uses ABI-15. When updating tree-sitter-go, check that the
//! node kinds and field names used below still exist.

use crate::error::{ParseError, ParseResult};
use crate::parsing::Declaration;
use tree_sitter::{Node, Parser, Tree};

/// Go language parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> ParseResult<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| ParseError::ParserInit {
                language: "Go".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse Go source into a concrete syntax tree.
    ///
    /// Tree-sitter recovers from syntax errors, so a returned tree may still
    /// contain `ERROR` or missing nodes; see [`syntax_errors`].
    pub fn parse(&mut self, code: &str) -> ParseResult<Tree> {
        self.parser
            .parse(code, None)
            .ok_or_else(|| ParseError::SyntaxError {
                line: 1,
                column: 1,
                reason: "parser produced no syntax tree".to_string(),
            })
    }
}

/// Read one `import_spec` node.
///
/// Handles all Go import styles:
/// - Standard imports: `"fmt"`
/// - Aliased imports: `f "fmt"`
/// - Dot imports: `. "fmt"`
/// - Blank imports: `_ "database/sql"`
/// - Raw string paths: `` `fmt` ``
pub fn read_import_spec(node: Node, code: &str) -> Option<Declaration> {
    let path_node = node.child_by_field_name("path")?;
    let path_text = &code[path_node.byte_range()];
    let path = path_text.trim_matches(|c: char| c == '"' || c == '`');

    let mut declaration = Declaration::new(path);
    if let Some(name) = node.child_by_field_name("name") {
        // package_identifier, dot or blank_identifier; all three are kept as written
        declaration.alias = Some(code[name.byte_range()].to_string());
    }
    Some(declaration)
}

/// All syntax errors in the subtree rooted at `node`, in source order.
///
/// Error and missing nodes are reported without descending into them.
pub fn syntax_errors(node: Node) -> Vec<Node> {
    let mut errors = Vec::new();
    collect_errors(node, &mut errors);
    errors
}

fn collect_errors<'t>(node: Node<'t>, errors: &mut Vec<Node<'t>>) {
    if !node.has_error() {
        return;
    }
    if node.is_error() || node.is_missing() {
        errors.push(node);
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, errors);
    }
}

/// Whether an error node swallowed an `import` keyword during recovery.
pub fn contains_import_keyword(node: Node) -> bool {
    if matches!(
        node.kind(),
        "import" | "import_spec" | "import_spec_list" | "import_declaration"
    ) {
        return true;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).any(contains_import_keyword)
}

/// Build a [`ParseError`] with a custom reason pointing at `node`.
pub fn error_at(node: Node, reason: impl Into<String>) -> ParseError {
    let position = node.start_position();
    ParseError::SyntaxError {
        line: (position.row + 1) as u32,
        column: (position.column + 1) as u32,
        reason: reason.into(),
    }
}

/// Build a [`ParseError`] describing the error node `node`.
pub fn syntax_error(node: Node, code: &str) -> ParseError {
    let reason = if node.is_missing() {
        format!("missing '{}'", node.kind())
    } else {
        let snippet: String = code[node.byte_range()]
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(40)
            .collect();
        format!("unexpected '{}'", snippet.trim())
    };
    error_at(node, reason)
}
