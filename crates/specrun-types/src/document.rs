//! Specification document shape.

use serde::{Deserialize, Serialize};

use crate::record::TestRecord;

/// The parsed body of one specification document: the ordered test records
/// of a single named group.
///
/// Immutable once loaded. The loader performs one fetch per call and does
/// not cache; callers needing reuse hold on to the returned document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    /// The group name the document was fetched for.
    pub group: String,
    /// Test records in document order.
    pub tests: Vec<TestRecord>,
}

impl SpecDocument {
    /// Create a document from a group name and its records.
    pub fn new(group: impl Into<String>, tests: Vec<TestRecord>) -> Self {
        Self {
            group: group.into(),
            tests,
        }
    }

    /// Number of test records in the document.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the document carries no records.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
