//! Re-emission of arranged imports into Go syntax

use super::group::ImportGroup;
use crate::parsing::Declaration;

/// Render the import section. Returns `None` when no declaration is left, in
/// which case the whole region, keyword and block comment included, goes away.
///
/// A lone declaration that was written as `import "path"` keeps that form;
/// everything else becomes one `import ( ... )` block with a blank line between
/// groups. Lines are terminated with `newline`.
pub fn render(block_doc: &[String], groups: &[ImportGroup], newline: &str) -> Option<String> {
    let mut all = groups.iter().flat_map(|g| g.declarations.iter());
    let first = all.next()?;
    let single = all.next().is_none();

    let mut out = String::new();
    for line in block_doc {
        out.push_str(line);
        out.push_str(newline);
    }

    if single && first.standalone {
        for line in &first.doc {
            out.push_str(line);
            out.push_str(newline);
        }
        out.push_str("import ");
        out.push_str(&spec_line(first));
        return Some(out);
    }

    out.push_str("import (");
    out.push_str(newline);
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push_str(newline);
        }
        for declaration in &group.declarations {
            for line in &declaration.doc {
                out.push('\t');
                out.push_str(line);
                out.push_str(newline);
            }
            out.push('\t');
            out.push_str(&spec_line(declaration));
            out.push_str(newline);
        }
    }
    out.push(')');
    Some(out)
}

/// The line terminator a file already uses: `\r\n` if any line ends with it.
pub fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

/// `[alias ]"path"[ // comment]`
pub fn spec_line(declaration: &Declaration) -> String {
    let mut line = String::new();
    if let Some(alias) = &declaration.alias {
        line.push_str(alias);
        line.push(' ');
    }
    line.push('"');
    line.push_str(&declaration.path);
    line.push('"');
    if let Some(comment) = &declaration.trailing {
        line.push(' ');
        line.push_str(comment);
    }
    line
}

/// Put the rendered section back between the untouched head and tail with
/// exactly one blank line on either side.
pub fn splice(head: &str, rendered: Option<&str>, tail: &str, newline: &str) -> String {
    let mut out = String::with_capacity(head.len() + tail.len() + 256);
    out.push_str(head);
    out.push_str(newline);
    if let Some(section) = rendered {
        out.push_str(newline);
        out.push_str(section);
        out.push_str(newline);
    }
    if !tail.is_empty() {
        out.push_str(newline);
        out.push_str(tail);
    }
    out
}
