//! Document provider seam.

use std::collections::BTreeMap;

use specrun_types::SpecDocument;

use crate::errors::{LoadError, LoadResult};

/// A keyed-by-name source of specification documents.
///
/// One fetch per call: providers do not retry and do not cache. Callers
/// needing reuse hold on to the returned document themselves.
pub trait DocumentProvider {
    /// Resolve a group name to its specification document.
    fn fetch(&self, group: &str) -> LoadResult<SpecDocument>;
}

/// An in-memory provider serving pre-registered documents.
///
/// Used by tests and offline runs; an unregistered group name reports a
/// retrieval failure, the same way an unreachable location would.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    docs: BTreeMap<String, SpecDocument>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under its group name.
    pub fn insert(&mut self, doc: SpecDocument) {
        self.docs.insert(doc.group.clone(), doc);
    }

    /// Builder-style registration.
    pub fn with(mut self, doc: SpecDocument) -> Self {
        self.insert(doc);
        self
    }
}

impl DocumentProvider for StaticProvider {
    fn fetch(&self, group: &str) -> LoadResult<SpecDocument> {
        self.docs
            .get(group)
            .cloned()
            .ok_or_else(|| LoadError::Retrieval {
                group: group.to_string(),
                reason: "no document registered for this group".to_string(),
            })
    }
}
