//! Case outcomes and per-case results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The outcome of executing one test case.
///
/// `Fail` and `Error` are distinct: a failure means the subject returned a
/// wrong-but-valid value, an error means the subject itself misbehaved.
/// Both are recorded per case and never halt the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaseOutcome {
    /// The subject's result was deep-equal to the oracle.
    Pass,
    /// The subject returned a value not deep-equal to the oracle. Both sides
    /// are carried for diagnostic display.
    Fail { expected: Value, actual: Value },
    /// The subject failed during invocation.
    Error { message: String },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Short status label for report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail { .. } => "FAIL",
            Self::Error { .. } => "ERROR",
        }
    }
}

/// The recorded result of one executed test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Identifying string, group-prefixed where applicable.
    pub name: String,
    /// The record's description; may be empty.
    pub desc: String,
    /// What happened.
    pub outcome: CaseOutcome,
}

impl CaseResult {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, outcome: CaseOutcome) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            outcome,
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.outcome.label(), self.name)?;
        match &self.outcome {
            CaseOutcome::Pass => Ok(()),
            CaseOutcome::Fail { expected, actual } => {
                write!(f, ": expected {expected}, got {actual}")
            }
            CaseOutcome::Error { message } => write!(f, ": {message}"),
        }
    }
}
