//! Group sorting and merging

use super::classify::{Classifier, Group};
use crate::parsing::Declaration;
use std::collections::BTreeMap;

/// A non-empty bucket of declarations sharing one [`Group`], sorted by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportGroup {
    pub group: Group,
    pub declarations: Vec<Declaration>,
}

/// Classify, bucket and sort. Groups come out in category order, each sorted by
/// path byte-wise; empty groups never appear.
pub fn arrange(classifier: &Classifier, declarations: Vec<Declaration>) -> Vec<ImportGroup> {
    let mut buckets: BTreeMap<Group, Vec<Declaration>> = BTreeMap::new();
    for declaration in declarations {
        buckets
            .entry(classifier.classify(&declaration.path))
            .or_default()
            .push(declaration);
    }

    buckets
        .into_iter()
        .map(|(group, mut declarations)| {
            declarations.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
            ImportGroup {
                group,
                declarations,
            }
        })
        .collect()
}
