//! Import declaration representation
//!
//! A [`Declaration`] owns every comment attached to it, so reordering a list of
//! declarations can never separate an import from its documentation.

use std::borrow::Cow;

/// Represents one import spec of a Go file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The path being imported, without quotes (e.g., "github.com/pkg/errors")
    pub path: String,
    /// The alias token if any: an identifier, `_` or `.`
    pub alias: Option<String>,
    /// Full-line comments directly above the spec, verbatim
    pub doc: Vec<String>,
    /// Comment on the same line as the spec, normalized
    pub trailing: Option<String>,
    /// Whether the spec was written as `import "path"` rather than inside `import ( ... )`
    pub standalone: bool,
}

impl Declaration {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
            doc: Vec::new(),
            trailing: None,
            standalone: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn with_trailing(mut self, comment: &str) -> Self {
        self.attach_trailing(comment);
        self
    }

    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    /// Attach a same-line comment. A second comment on the same line is appended.
    pub fn attach_trailing(&mut self, raw: &str) {
        let comment = normalize_comment(raw);
        self.trailing = Some(match self.trailing.take() {
            Some(existing) => format!("{existing} {comment}"),
            None => comment,
        });
    }

    /// Imported purely for side effects (`_ "path"`)
    pub fn is_blank(&self) -> bool {
        self.alias.as_deref() == Some("_")
    }

    /// Imported into the file scope (`. "path"`)
    pub fn is_dot(&self) -> bool {
        self.alias.as_deref() == Some(".")
    }

    /// The name code refers to this import by.
    ///
    /// `None` for blank and dot imports, and for unaliased paths whose last
    /// segment yields no usable package name (`github.com/json-iterator/go`
    /// declares `jsoniter`, which cannot be told from the path).
    pub fn binding_name(&self) -> Option<Cow<'_, str>> {
        match self.alias.as_deref() {
            Some("_") | Some(".") => None,
            Some(alias) => Some(Cow::Borrowed(alias)),
            None => {
                let name = assumed_name(&self.path);
                is_package_name(&name).then_some(Cow::Owned(name))
            }
        }
    }

    /// Alias to give an unaliased import whose last segment is a major version
    /// (`github.com/go-pg/pg/v9` becomes `pg`).
    pub fn version_suffix_alias(&self) -> Option<String> {
        if self.alias.is_some() {
            return None;
        }
        let (parent, last) = self.path.rsplit_once('/')?;
        if !is_version_segment(last) || parent.is_empty() {
            return None;
        }
        let name = assumed_name(parent);
        is_package_name(&name).then_some(name)
    }
}

/// Package name Go tooling assumes for an import path when the package itself
/// is not loaded.
pub fn assumed_name(path: &str) -> String {
    let mut segments = path.rsplit('/');
    let mut base = segments.next().unwrap_or(path);
    if is_version_segment(base) {
        if let Some(parent) = segments.next() {
            base = parent;
        }
    }
    let base = base.strip_prefix("go-").unwrap_or(base);
    base.chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
    "package", "range", "return", "select", "struct", "switch", "type", "var",
];

/// A name Go code could refer to a package by.
fn is_package_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| !c.is_ascii_digit()) && !GO_KEYWORDS.contains(&name)
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Normalize a trailing comment: `//` line comments get exactly one space after
/// the marker, block comments are kept as written.
pub fn normalize_comment(raw: &str) -> String {
    let raw = raw.trim();
    match raw.strip_prefix("//") {
        Some(text) => {
            let text = text.trim();
            if text.is_empty() {
                "//".to_string()
            } else {
                format!("// {text}")
            }
        }
        None => raw.to_string(),
    }
}
