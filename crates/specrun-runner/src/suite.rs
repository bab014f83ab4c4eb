//! Suite building and sequential execution.

use specrun_loader::{DocumentProvider, LoadError};
use specrun_types::{CaseResult, MalformedRecordError};
use tracing::debug;

use crate::case::{CaseVariant, SpecCase};
use crate::sink::ResultSink;

/// Errors raised while building a suite.
///
/// All of them abort the affected group's suite, not the batch. The group
/// name is always attached for operator reporting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// The specification document could not be retrieved or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A record in the document could not be decomposed. Fail-fast: one bad
    /// record abandons the whole suite, no partial suite is produced.
    #[error("malformed record in group `{group}`: {source}")]
    Record {
        group: String,
        #[source]
        source: MalformedRecordError,
    },
}

impl BuildError {
    /// The group name the failure belongs to.
    pub fn group(&self) -> &str {
        match self {
            Self::Load(e) => e.group(),
            Self::Record { group, .. } => group,
        }
    }
}

/// The constructed cases of one group, fresh per invocation.
pub struct Suite {
    /// The group the cases were built from.
    pub group: String,
    cases: Vec<SpecCase>,
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("group", &self.group)
            .field("cases", &self.cases.len())
            .finish()
    }
}

impl Suite {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Execute every case in suite order, forwarding each result to the
    /// sink. Case failures and errors are recorded and never halt the run.
    pub fn run(&self, sink: &mut dyn ResultSink) -> Vec<CaseResult> {
        let mut results = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            debug!(case = case.display_name(), "running case");
            let outcome = case.run();
            let result = CaseResult::new(case.display_name(), case.description(), outcome);
            sink.case_finished(&self.group, &result);
            results.push(result);
        }
        results
    }
}

/// Build the suite for one group: fetch its document once, then construct
/// one case per record in document order.
///
/// Propagates loader failures; a malformed record aborts the whole build.
pub fn build_suite(
    provider: &dyn DocumentProvider,
    group: &str,
    variant: &CaseVariant,
) -> Result<Suite, BuildError> {
    let document = provider.fetch(group)?;
    debug!(group, records = document.len(), "building suite");

    let mut cases = Vec::with_capacity(document.len());
    for record in &document.tests {
        let case = variant
            .build(record, Some(group))
            .map_err(|source| BuildError::Record {
                group: group.to_string(),
                source,
            })?;
        cases.push(case);
    }

    Ok(Suite {
        group: group.to_string(),
        cases,
    })
}

/// Convenience wrapper for the common case: build a suite with the generic
/// call variant.
pub fn build_generic_suite(
    provider: &dyn DocumentProvider,
    group: &str,
    subject: std::sync::Arc<dyn crate::subject::Subject>,
) -> Result<Suite, BuildError> {
    build_suite(provider, group, &CaseVariant::Generic(subject))
}
