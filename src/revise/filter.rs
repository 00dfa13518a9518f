//! Unused import removal

use crate::parsing::Declaration;
use std::collections::HashSet;
use tracing::debug;

/// Keep declarations whose binding name is referenced in `used`.
///
/// Blank (`_`) and dot (`.`) imports, and imports whose package name cannot be
/// derived from the path, have no known name and are always kept. A removed
/// declaration takes its comments with it.
pub fn retain_used(declarations: Vec<Declaration>, used: &HashSet<String>) -> Vec<Declaration> {
    declarations
        .into_iter()
        .filter(|declaration| match declaration.binding_name() {
            None => true,
            Some(name) if used.contains(name.as_ref()) => true,
            Some(name) => {
                debug!("removing unused import {} (as {name})", declaration.path);
                false
            }
        })
        .collect()
}
