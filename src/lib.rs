//! Canonical ordering and grouping of Go import declarations.
//!
//! The [`revise`] module holds the pipeline; [`process`] is the one-call entry
//! point and [`Reviser`] the reusable, thread-safe form.

pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod project_resolver;
pub mod revise;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{ParseError, ParseResult, ReviseError, ReviseResult};
pub use parsing::Declaration;
pub use revise::{Options, Revision, Reviser, process};
