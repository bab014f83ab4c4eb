//! Run report generation.
//!
//! Produces structured reports of case results with per-suite breakdowns
//! and summary counts.

use std::fmt;

use specrun_types::CaseResult;

use crate::suite::BuildError;

/// Summary statistics over executed cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Total cases executed.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Number that failed (wrong value).
    pub failed: usize,
    /// Number that errored (subject misbehaved).
    pub errored: usize,
}

impl RunSummary {
    /// Tally a list of case results.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CaseResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.total += 1;
            if result.outcome.is_pass() {
                summary.passed += 1;
            } else if result.outcome.is_fail() {
                summary.failed += 1;
            } else {
                summary.errored += 1;
            }
        }
        summary
    }

    /// Whether every executed case passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} passed, {} failed, {} errored",
            self.passed, self.total, self.failed, self.errored,
        )
    }
}

/// Results of one executed suite.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// The group the suite was built from.
    pub group: String,
    /// Case results in execution order.
    pub results: Vec<CaseResult>,
    /// Counts over `results`.
    pub summary: RunSummary,
}

impl SuiteReport {
    /// Build from the results of one suite run.
    pub fn from_results(group: impl Into<String>, results: Vec<CaseResult>) -> Self {
        let summary = RunSummary::from_results(&results);
        Self {
            group: group.into(),
            results,
            summary,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.all_passed() { "+" } else { "!" };
        writeln!(
            f,
            "  [{}] {} ({}/{})",
            icon, self.group, self.summary.passed, self.summary.total,
        )?;
        for result in &self.results {
            writeln!(f, "      {}", result)?;
        }
        Ok(())
    }
}

/// A suite that could not be built, with the build-time error attached.
#[derive(Debug, Clone)]
pub struct GroupFailure {
    pub group: String,
    pub error: BuildError,
}

/// A complete batch report: per-suite results plus the groups whose suites
/// never got built.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Reports for the suites that were built and ran.
    pub suites: Vec<SuiteReport>,
    /// Groups abandoned at build time.
    pub build_failures: Vec<GroupFailure>,
    /// Counts over every executed case.
    pub summary: RunSummary,
}

impl BatchReport {
    /// Aggregate suite reports and build failures.
    pub fn from_parts(suites: Vec<SuiteReport>, build_failures: Vec<GroupFailure>) -> Self {
        let summary = RunSummary::from_results(suites.iter().flat_map(|s| &s.results));
        Self {
            suites,
            build_failures,
            summary,
        }
    }

    /// Whether every case passed and every suite was built.
    pub fn all_passed(&self) -> bool {
        self.summary.all_passed() && self.build_failures.is_empty()
    }

    /// Only the non-passing case results.
    pub fn failures(&self) -> Vec<&CaseResult> {
        self.suites
            .iter()
            .flat_map(|s| &s.results)
            .filter(|r| !r.outcome.is_pass())
            .collect()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+--------------------------------------------------+")?;
        writeln!(f, "|   Specification Conformance Report               |")?;
        writeln!(f, "+--------------------------------------------------+")?;
        writeln!(
            f,
            "| Total: {:4}  Passed: {:4}  Failed: {:4}  Errors: {:4}",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.errored,
        )?;
        writeln!(f, "+--------------------------------------------------+")?;
        writeln!(f)?;

        for suite in &self.suites {
            write!(f, "{suite}")?;
        }

        if !self.build_failures.is_empty() {
            writeln!(f)?;
            for failure in &self.build_failures {
                writeln!(f, "  [x] {}: {}", failure.group, failure.error)?;
            }
        }

        writeln!(f)?;
        if self.all_passed() {
            writeln!(f, "  ALL CASES CONFORM")?;
        } else {
            writeln!(
                f,
                "  {} CASE(S) NOT CONFORMING, {} SUITE(S) NOT BUILT",
                self.summary.failed + self.summary.errored,
                self.build_failures.len(),
            )?;
        }
        Ok(())
    }
}
