//! Output management for the CLI.
//!
//! Revised sources and changed-file listings go to stdout, errors with their
//! recovery suggestions to stderr.

use crate::error::ReviseError;
use crate::io::exit_code::ExitCode;
use std::io::{self, Write};
use std::path::Path;

/// Manages output of per-file results.
pub struct OutputManager {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    pub fn new() -> Self {
        Self {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self { stdout, stderr }
    }

    /// Print a revised file's full text.
    pub fn revised_text(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    /// List a file whose imports are not in canonical form.
    pub fn would_change(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.stdout, "{}", path.display())
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &ReviseError) -> io::Result<ExitCode> {
        writeln!(self.stderr, "Error: {error}")?;
        for suggestion in error.recovery_suggestions() {
            writeln!(self.stderr, "  Suggestion: {suggestion}")?;
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output progress information.
    pub fn progress(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.stderr, "{message}")
    }
}
