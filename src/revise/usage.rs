//! Usage analysis: which import names does the file body refer to?

use super::extract::FileSnapshot;
use crate::error::CollaboratorError;
use std::collections::HashSet;
use tree_sitter::Node;

/// Reports the package names a file's body references.
///
/// Only consulted when unused-import removal is enabled.
pub trait UsageAnalyzer: Send + Sync {
    fn referenced_names(&self, file: &FileSnapshot<'_>) -> Result<HashSet<String>, CollaboratorError>;
}

/// Syntactic analyzer over the tree-sitter parse tree.
///
/// Collects the operand of every `pkg.Name` selector expression and the
/// package qualifier of every `pkg.Type` qualified type outside the import
/// declarations. A body with syntax errors is refused, since a partial tree
/// could hide a reference and get a used import removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterUsageAnalyzer;

impl UsageAnalyzer for TreeSitterUsageAnalyzer {
    fn referenced_names(&self, file: &FileSnapshot<'_>) -> Result<HashSet<String>, CollaboratorError> {
        let root = file.tree().root_node();
        if root.has_error() {
            return Err("file contains syntax errors; refusing to guess which imports are used".into());
        }

        let code = file.source();
        let mut names = HashSet::new();
        let mut cursor = root.walk();
        'walk: loop {
            let node = cursor.node();
            let descend = node.kind() != "import_declaration";
            if let Some(name) = qualifier(node, code) {
                names.insert(name.to_string());
            }

            if descend && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    continue 'walk;
                }
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }
        Ok(names)
    }
}

fn qualifier<'a>(node: Node, code: &'a str) -> Option<&'a str> {
    let target = match node.kind() {
        "selector_expression" => node
            .child_by_field_name("operand")
            .filter(|operand| operand.kind() == "identifier")?,
        "qualified_type" => node.child_by_field_name("package")?,
        _ => return None,
    };
    Some(&code[target.byte_range()])
}
