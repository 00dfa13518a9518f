//! Import classification
//!
//! Every import path lands in exactly one [`Group`]. The rules live in one
//! ordered table and the first matching rule wins:
//!
//! 1. configured local prefixes, longest prefix first
//! 2. the project's own module path
//! 3. standard library: no dot in the first path segment
//! 4. everything else is third-party
//!
//! The configured rules are checked before the standard-library heuristic so a
//! dotless module path (`mycompany/tool/pkg`) still reaches its own group.

use tracing::trace;

/// Semantic category of an import. The derived ordering is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Standard,
    /// Rank of the local prefix, most specific (longest) first
    Local(usize),
    Project,
    ThirdParty,
}

#[derive(Debug, Clone)]
enum Rule {
    Prefix { prefix: String, group: Group },
    Standard,
}

impl Rule {
    fn apply(&self, path: &str) -> Option<Group> {
        match self {
            Rule::Prefix { prefix, group } => path.starts_with(prefix.as_str()).then_some(*group),
            Rule::Standard => {
                let first_segment = path.split('/').next().unwrap_or(path);
                (!first_segment.contains('.')).then_some(Group::Standard)
            }
        }
    }
}

/// Ordered rule table built once per configuration and shared across files.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Local prefixes are ranked by specificity: longer prefixes match first
    /// and their groups are emitted first. Prefixes of equal length keep their
    /// configured order. Blank and duplicate entries are ignored, and an empty
    /// `project` disables the project group.
    pub fn new<S: AsRef<str>>(project: &str, local_prefixes: &[S]) -> Self {
        let mut prefixes: Vec<String> = Vec::new();
        for prefix in local_prefixes {
            let prefix = prefix.as_ref().trim();
            if prefix.is_empty() || prefixes.iter().any(|p| p == prefix) {
                continue;
            }
            prefixes.push(prefix.to_string());
        }
        // stable: equal lengths keep configured order
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut rules: Vec<Rule> = prefixes
            .into_iter()
            .enumerate()
            .map(|(rank, prefix)| Rule::Prefix {
                prefix,
                group: Group::Local(rank),
            })
            .collect();

        let project = project.trim();
        if !project.is_empty() {
            rules.push(Rule::Prefix {
                prefix: project.to_string(),
                group: Group::Project,
            });
        }
        rules.push(Rule::Standard);

        Self { rules }
    }

    pub fn classify(&self, path: &str) -> Group {
        let group = self
            .rules
            .iter()
            .find_map(|rule| rule.apply(path))
            .unwrap_or(Group::ThirdParty);
        trace!("classified {path} as {group:?}");
        group
    }
}
