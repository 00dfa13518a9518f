//! Import revision pipeline
//!
//! One file's text goes in, the rewritten text and a changed flag come out.
//! The stages are independent pure functions composed by [`Reviser::revise`]:
//!
//! - [`extract`]: parse, read declarations with their comments, locate the region
//! - [`filter`]: optional unused-import removal through a [`UsageAnalyzer`]
//! - [`classify`] / [`group`]: bucket by category, sort by path
//! - [`emit`]: render the section and splice it between the untouched head and tail
//!
//! Change detection is a byte comparison of the result with the input.
//! A [`Reviser`] holds configuration only, so one instance can serve any number
//! of files from any number of threads.

pub mod classify;
pub mod emit;
pub mod extract;
pub mod filter;
pub mod group;
pub mod printer;
pub mod usage;

pub use classify::{Classifier, Group};
pub use extract::{FileSnapshot, ImportRegion, extract};
pub use group::ImportGroup;
pub use printer::{CanonicalPrinter, GofmtPrinter};
pub use usage::{TreeSitterUsageAnalyzer, UsageAnalyzer};

use crate::error::{ReviseError, ReviseResult};
use bitflags::bitflags;
use std::path::Path;
use tracing::debug;

bitflags! {
    /// Optional behaviors of a revision
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Options: u8 {
        /// Drop imports whose name is never referenced
        const REMOVE_UNUSED        = 0b00000001;
        /// Alias third-party `.../name/vN` imports as `name`
        const ALIAS_VERSION_SUFFIX = 0b00000010;
        /// Run the canonical printer over the whole result
        const FORMAT               = 0b00000100;
    }
}

/// Result of revising one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub text: String,
    pub changed: bool,
}

/// Configured import reviser
pub struct Reviser {
    project: String,
    classifier: Classifier,
    options: Options,
    usage: Box<dyn UsageAnalyzer>,
    printer: Box<dyn CanonicalPrinter>,
}

impl Reviser {
    /// Reviser for a project module path with default collaborators and no options.
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            classifier: Classifier::new::<&str>(project, &[]),
            options: Options::empty(),
            usage: Box::new(TreeSitterUsageAnalyzer),
            printer: Box::new(GofmtPrinter::default()),
        }
    }

    pub fn with_local_prefixes<S: AsRef<str>>(mut self, prefixes: &[S]) -> Self {
        self.classifier = Classifier::new(&self.project, prefixes);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_usage_analyzer(mut self, usage: impl UsageAnalyzer + 'static) -> Self {
        self.usage = Box::new(usage);
        self
    }

    pub fn with_printer(mut self, printer: impl CanonicalPrinter + 'static) -> Self {
        self.printer = Box::new(printer);
        self
    }

    /// Revise one file's text. `file` identifies the file in errors only.
    pub fn revise(&self, file: &Path, source: &str) -> ReviseResult<Revision> {
        let snapshot = extract(source).map_err(|e| ReviseError::Parse {
            path: file.to_path_buf(),
            source: e,
        })?;

        let mut text = match snapshot.region() {
            Some(region) => self.rewrite_region(file, &snapshot, region)?,
            None => source.to_string(),
        };

        if self.options.contains(Options::FORMAT) {
            text = self
                .printer
                .print(&text)
                .map_err(|e| ReviseError::FormatFailed {
                    path: file.to_path_buf(),
                    source: e,
                })?;
        }

        let changed = text != source;
        debug!("revised {} (changed: {changed})", file.display());
        Ok(Revision { text, changed })
    }

    fn rewrite_region(
        &self,
        file: &Path,
        snapshot: &FileSnapshot<'_>,
        region: &ImportRegion,
    ) -> ReviseResult<String> {
        let mut declarations = region.declarations.clone();

        if self.options.contains(Options::REMOVE_UNUSED) {
            let used = self.usage.referenced_names(snapshot).map_err(|e| {
                ReviseError::UsageAnalysisFailed {
                    path: file.to_path_buf(),
                    source: e,
                }
            })?;
            declarations = filter::retain_used(declarations, &used);
        }

        if self.options.contains(Options::ALIAS_VERSION_SUFFIX) {
            for declaration in &mut declarations {
                if self.classifier.classify(&declaration.path) != Group::ThirdParty {
                    continue;
                }
                if let Some(alias) = declaration.version_suffix_alias() {
                    declaration.alias = Some(alias);
                }
            }
        }

        let groups = group::arrange(&self.classifier, declarations);
        let newline = emit::line_ending(snapshot.source());
        let rendered = emit::render(&region.block_doc, &groups, newline);
        Ok(emit::splice(
            snapshot.head(),
            rendered.as_deref(),
            snapshot.tail(),
            newline,
        ))
    }
}

/// One-shot revision with the built-in collaborators.
///
/// Returns the rewritten text and whether it differs from `source`.
pub fn process<S: AsRef<str>>(
    project: &str,
    source: &str,
    local_prefixes: &[S],
    options: Options,
) -> ReviseResult<(String, bool)> {
    let reviser = Reviser::new(project)
        .with_local_prefixes(local_prefixes)
        .with_options(options);
    let revision = reviser.revise(Path::new("<input>"), source)?;
    Ok((revision.text, revision.changed))
}
