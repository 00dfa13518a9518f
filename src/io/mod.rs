//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Discovery of Go files from path arguments
//! - Reporting of revised text, changed files and errors
//! - Exit codes

pub mod exit_code;
pub mod output;
pub mod walker;

pub use exit_code::ExitCode;
pub use output::OutputManager;
pub use walker::FileWalker;
