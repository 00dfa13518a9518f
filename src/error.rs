//! Error types for import revision
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages. Every failure is fatal for
//! the file it concerns: callers leave that file untouched and move on.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by an injected collaborator (usage analyzer, canonical printer).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for revising a single file
#[derive(Error, Debug)]
pub enum ReviseError {
    /// Malformed import declarations
    #[error("Failed to parse imports in '{path}': {source}")]
    Parse { path: PathBuf, source: ParseError },

    /// Usage analyzer failed while removing unused imports
    #[error("Usage analysis failed for '{path}': {source}")]
    UsageAnalysisFailed {
        path: PathBuf,
        source: CollaboratorError,
    },

    /// Canonical printer failed while formatting
    #[error("Formatting failed for '{path}': {source}")]
    FormatFailed {
        path: PathBuf,
        source: CollaboratorError,
    },

    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No project module path configured and none found in a go.mod
    #[error("No module path for '{path}': no go.mod found and no project name configured")]
    ModuleNotFound { path: PathBuf },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl ReviseError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::Parse { .. } => "PARSE_ERROR",
            Self::UsageAnalysisFailed { .. } => "USAGE_ANALYSIS_FAILED",
            Self::FormatFailed { .. } => "FORMAT_FAILED",
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ModuleNotFound { .. } => "MODULE_NOT_FOUND",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::Parse { .. } => vec![
                "Fix the syntax error in the import section and run again",
                "Run 'go vet' on the file to see the compiler's diagnostic",
            ],
            Self::FormatFailed { .. } => vec![
                "Check that gofmt is installed and on PATH",
                "Set 'gofmt_command' in .reviser.toml to the formatter binary",
            ],
            Self::ModuleNotFound { .. } => vec![
                "Pass --project-name with the module path from go.mod",
                "Run the tool from inside a Go module",
            ],
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::FileWrite { .. } => vec!["Check that you have write permissions for the file"],
            _ => vec![],
        }
    }
}

/// Errors specific to parsing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Failed to parse code at line {line}, column {column}: {reason}")]
    SyntaxError {
        line: u32,
        column: u32,
        reason: String,
    },

    #[error("Missing package clause")]
    MissingPackageClause,
}

/// Result type alias for revision operations
pub type ReviseResult<T> = Result<T, ReviseError>;

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
