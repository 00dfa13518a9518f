//! `go.mod` lookup and `module` directive parsing

use std::path::{Path, PathBuf};

/// Nearest `go.mod` in `start` or any of its ancestors.
pub fn find_go_mod(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("go.mod"))
        .find(|candidate| candidate.is_file())
}

/// Read the module path from the `module` directive of a go.mod file.
///
/// Accepts quoted and unquoted paths and ignores trailing `//` comments.
pub fn parse_module_path(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '"' || c == '`') {
            return None;
        }
        let path = rest.trim().trim_matches(|c: char| c == '"' || c == '`');
        (!path.is_empty()).then(|| path.to_string())
    })
}
