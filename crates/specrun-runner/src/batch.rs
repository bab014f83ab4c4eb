//! Batch running across multiple groups.

use std::collections::BTreeSet;

use specrun_loader::DocumentProvider;
use tracing::{info, warn};

use crate::case::CaseVariant;
use crate::report::{BatchReport, GroupFailure, SuiteReport};
use crate::sink::ResultSink;
use crate::suite::build_suite;

/// Marker prefixing optional/experimental group names in a configured list.
pub const ADVANCED_MARKER: char = '~';

/// Explicit group configuration: a mandatory base set and an optional
/// advanced set.
///
/// Built from one flat name list where advanced groups carry a leading
/// [`ADVANCED_MARKER`], stripped before use. Sets, not sequences: group
/// order carries no meaning, case names are the reporting key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSelection {
    /// Mandatory, stable groups. The default entry point runs only these.
    pub base: BTreeSet<String>,
    /// Optional, experimental groups.
    pub advanced: BTreeSet<String>,
}

impl GroupSelection {
    /// Split a flat name list into base and advanced sets.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for name in names {
            let name = name.as_ref();
            match name.strip_prefix(ADVANCED_MARKER) {
                Some(stripped) => selection.advanced.insert(stripped.to_string()),
                None => selection.base.insert(name.to_string()),
            };
        }
        selection
    }

    /// The groups to run: the base set, plus the advanced set when asked.
    pub fn selected(&self, include_advanced: bool) -> BTreeSet<String> {
        let mut groups = self.base.clone();
        if include_advanced {
            groups.extend(self.advanced.iter().cloned());
        }
        groups
    }
}

/// Builds and runs one suite per group, forwarding every outcome to a sink.
pub struct BatchRunner<'a> {
    provider: &'a dyn DocumentProvider,
    variant: CaseVariant,
}

impl<'a> BatchRunner<'a> {
    /// Bind a document provider and a case variant for all groups.
    pub fn new(provider: &'a dyn DocumentProvider, variant: CaseVariant) -> Self {
        Self { provider, variant }
    }

    /// Run the given groups.
    ///
    /// A build-time failure for one group is reported to the sink with the
    /// group name attached and does not halt the other groups; case-level
    /// failures and errors never halt anything.
    pub fn run(&self, groups: &BTreeSet<String>, sink: &mut dyn ResultSink) -> BatchReport {
        let mut suites = Vec::new();
        let mut build_failures = Vec::new();

        for group in groups {
            match build_suite(self.provider, group, &self.variant) {
                Ok(suite) => {
                    info!(%group, cases = suite.len(), "running suite");
                    let results = suite.run(sink);
                    suites.push(SuiteReport::from_results(group.clone(), results));
                }
                Err(error) => {
                    warn!(%group, %error, "suite not built");
                    sink.suite_failed(group, &error);
                    build_failures.push(GroupFailure {
                        group: group.clone(),
                        error,
                    });
                }
            }
        }

        let report = BatchReport::from_parts(suites, build_failures);
        info!(
            total = report.summary.total,
            passed = report.summary.passed,
            failed = report.summary.failed,
            errored = report.summary.errored,
            suites_not_built = report.build_failures.len(),
            "batch finished"
        );
        report
    }
}
