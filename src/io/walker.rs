//! Discovery of Go source files from command-line arguments

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directory never descended into
const VENDOR_DIR: &str = "vendor";

/// Walks directories to find Go files to revise
#[derive(Debug, Default, Clone, Copy)]
pub struct FileWalker;

impl FileWalker {
    pub fn new() -> Self {
        Self
    }

    /// Expand command-line arguments into the files to revise.
    ///
    /// Files are taken as given; directories are walked recursively. A Go-style
    /// recursive suffix (`./...`, `pkg/...`) is accepted and stripped. The
    /// result is sorted and free of duplicates.
    pub fn collect(&self, args: &[PathBuf]) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = args
            .iter()
            .map(|arg| strip_recursive_suffix(arg))
            .flat_map(|path| {
                if path.is_dir() {
                    self.walk(&path).collect::<Vec<_>>()
                } else {
                    vec![path]
                }
            })
            .collect();
        files.sort();
        files.dedup();
        files
    }

    /// Walk a directory and return an iterator of `.go` files
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(true) // Skip hidden files and directories
            .git_ignore(true) // Respect .gitignore files
            .git_global(true) // Respect global gitignore
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(false) // Don't follow symlinks
            .max_depth(None) // No depth limit
            .require_git(false) // Allow gitignore to work in non-git directories
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && entry.file_name() == VENDOR_DIR)
            });

        builder
            .build()
            .filter_map(Result::ok) // Skip files we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "go"))
            .map(|entry| entry.into_path())
    }
}

/// `pkg/...` -> `pkg`, `./...` -> `.`, `...` -> `.`
fn strip_recursive_suffix(arg: &Path) -> PathBuf {
    let Some(text) = arg.to_str() else {
        return arg.to_path_buf();
    };
    match text.strip_suffix("...") {
        Some(rest) => {
            let rest = rest.trim_end_matches('/');
            if rest.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(rest)
            }
        }
        None => arg.to_path_buf(),
    }
}
