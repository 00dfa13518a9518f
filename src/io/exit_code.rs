//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - every file processed (changed or not)
//! - `1`: General error - unspecified failure
//! - `3`: Changes found while listing diffs with `--set-exit-status`
//! - `4-6`: Specific per-file failures
//! - `126-255`: Reserved by shell

use crate::error::ReviseError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Files would change and the caller asked to be told (code 3)
    ChangesFound = 3,

    /// Malformed import section (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `ReviseError` to the appropriate exit code.
    pub fn from_error(error: &ReviseError) -> Self {
        match error {
            ReviseError::Parse { .. } => ExitCode::ParseError,
            ReviseError::FileRead { .. } | ReviseError::FileWrite { .. } => ExitCode::IoError,
            ReviseError::ConfigError { .. } | ReviseError::ModuleNotFound { .. } => {
                ExitCode::ConfigError
            }
            ReviseError::UsageAnalysisFailed { .. } | ReviseError::FormatFailed { .. } => {
                ExitCode::GeneralError
            }
        }
    }

    /// Pick the code to report when several files finished differently.
    ///
    /// Any failure outranks `ChangesFound`; among failures the first one wins.
    #[must_use]
    pub fn combine(self, other: ExitCode) -> Self {
        match (self, other) {
            (ExitCode::Success, code) | (code, ExitCode::Success) => code,
            (ExitCode::ChangesFound, code) | (code, ExitCode::ChangesFound) => code,
            (code, _) => code,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}
