//! Result sinks.
//!
//! Every case outcome and every suite build failure is forwarded to a sink;
//! nothing is silently suppressed.

use specrun_types::CaseResult;

use crate::suite::BuildError;

/// Receives per-case outcomes and per-group build failures as they happen.
pub trait ResultSink {
    /// One case finished with a recorded outcome.
    fn case_finished(&mut self, group: &str, result: &CaseResult);

    /// One group's suite could not be built; no cases from it will run.
    fn suite_failed(&mut self, group: &str, error: &BuildError);
}

/// Writes human-readable lines to the standard streams: case results to
/// stdout, build failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn case_finished(&mut self, _group: &str, result: &CaseResult) {
        println!("{result}");
    }

    fn suite_failed(&mut self, group: &str, error: &BuildError) {
        eprintln!("[ABORT] suite `{group}` not built: {error}");
    }
}

/// Collects everything it receives; for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// `(group, result)` pairs in arrival order.
    pub results: Vec<(String, CaseResult)>,
    /// `(group, error)` pairs in arrival order.
    pub failures: Vec<(String, BuildError)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn case_finished(&mut self, group: &str, result: &CaseResult) {
        self.results.push((group.to_string(), result.clone()));
    }

    fn suite_failed(&mut self, group: &str, error: &BuildError) {
        self.failures.push((group.to_string(), error.clone()));
    }
}
