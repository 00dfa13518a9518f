//! Canonical printing of the whole rewritten file

use crate::error::CollaboratorError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Lays out a whole Go file canonically. Only consulted when formatting is on.
pub trait CanonicalPrinter: Send + Sync {
    fn print(&self, source: &str) -> Result<String, CollaboratorError>;
}

/// Pipes the file through an external `gofmt`-compatible command.
#[derive(Debug, Clone)]
pub struct GofmtPrinter {
    program: String,
    args: Vec<String>,
}

impl Default for GofmtPrinter {
    fn default() -> Self {
        Self::new("gofmt")
    }
}

impl GofmtPrinter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl CanonicalPrinter for GofmtPrinter {
    fn print(&self, source: &str) -> Result<String, CollaboratorError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to run '{}': {e}", self.program))?;

        // gofmt reads all of stdin before writing, so a plain write cannot deadlock
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )
            .into());
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}
