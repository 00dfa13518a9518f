//! Project module resolution
//!
//! Finds the Go module a file belongs to so imports of the project's own
//! packages can be told apart from third-party ones.
//!
//! - go_mod: locating `go.mod` and reading its `module` directive
//! - memo: per-directory memoization shared by worker threads

pub mod go_mod;
pub mod memo;

pub use go_mod::{find_go_mod, parse_module_path};
pub use memo::ResolutionMemo;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Resolves and memoizes the module path for the directories files live in.
#[derive(Default)]
pub struct ModuleResolver {
    memo: ResolutionMemo<Option<String>>,
}

impl ModuleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module path of the nearest `go.mod` above `file`, if any.
    pub fn module_for(&self, file: &Path) -> Option<String> {
        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let dir: PathBuf = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

        if let Some(cached) = self.memo.get(&dir) {
            return (*cached).clone();
        }

        let module = find_go_mod(&dir).and_then(|go_mod| {
            let content = std::fs::read_to_string(&go_mod).ok()?;
            let module = parse_module_path(&content);
            debug!("{} declares module {module:?}", go_mod.display());
            module
        });
        let module = Arc::new(module);
        self.memo.insert(dir, Arc::clone(&module));
        (*module).clone()
    }
}
