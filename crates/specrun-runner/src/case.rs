//! Executable test cases.
//!
//! Two variants share one construction contract (record decomposition) and
//! differ in how they drive the subject. Selection is tagged dispatch via
//! [`SpecCase`]; the suite builder's caller picks the variant.

use std::sync::Arc;

use serde_json::{Map, Value};
use specrun_types::{CaseFields, CaseOutcome, RecordResult, TestRecord};

use crate::subject::{Subject, SubjectFactory};

/// A test case that invokes the subject directly with the record's
/// positional and keyword inputs.
pub struct GenericCase {
    fields: CaseFields,
    subject: Arc<dyn Subject>,
}

impl GenericCase {
    /// Decompose a record and bind it to a subject.
    pub fn from_record(
        record: &TestRecord,
        group: Option<&str>,
        subject: Arc<dyn Subject>,
    ) -> RecordResult<Self> {
        let fields = CaseFields::decompose(record, group)?;
        Ok(Self { fields, subject })
    }

    /// Invoke the subject and compare its result against the oracle.
    pub fn run(&self) -> CaseOutcome {
        match self.subject.call(&self.fields.args, &self.fields.keywords) {
            Ok(actual) => compare(&self.fields.expected, actual),
            Err(e) => CaseOutcome::Error {
                message: e.to_string(),
            },
        }
    }
}

/// A test case that drives a configure-then-invoke subject.
///
/// Interprets three conventional keyword fields, each defaulted when absent:
/// `partials` (object), `template` (string), `data` (any value). Additional
/// keywords are available but unused; their presence is not an error.
pub struct AdapterCase {
    fields: CaseFields,
    factory: Arc<dyn SubjectFactory>,
}

impl AdapterCase {
    /// Decompose a record and bind it to a subject factory.
    pub fn from_record(
        record: &TestRecord,
        group: Option<&str>,
        factory: Arc<dyn SubjectFactory>,
    ) -> RecordResult<Self> {
        let fields = CaseFields::decompose(record, group)?;
        Ok(Self { fields, factory })
    }

    /// Configure an instance from `partials`, render `template` against
    /// `data`, and compare against the oracle.
    pub fn run(&self) -> CaseOutcome {
        let keywords = &self.fields.keywords;

        let partials: Map<String, Value> = match keywords.get("partials") {
            None => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => return error_outcome("`partials` field is not an object"),
        };
        let template: &str = match keywords.get("template") {
            None => "",
            Some(Value::String(s)) => s,
            Some(_) => return error_outcome("`template` field is not a string"),
        };
        let data: Value = keywords
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        let instance = match self.factory.configure(&partials) {
            Ok(instance) => instance,
            Err(e) => {
                return CaseOutcome::Error {
                    message: e.to_string(),
                }
            }
        };

        match instance.render(template, &data) {
            Ok(actual) => compare(&self.fields.expected, actual),
            Err(e) => CaseOutcome::Error {
                message: e.to_string(),
            },
        }
    }
}

/// One executable test case, variant selected by the suite builder's caller.
pub enum SpecCase {
    Generic(GenericCase),
    Adapter(AdapterCase),
}

impl SpecCase {
    /// Identifying string for reporting, group-prefixed where applicable.
    pub fn display_name(&self) -> &str {
        &self.fields().display_name
    }

    /// The record's description; may be empty.
    pub fn description(&self) -> &str {
        &self.fields().desc
    }

    /// Execute the case against its bound subject.
    pub fn run(&self) -> CaseOutcome {
        match self {
            Self::Generic(case) => case.run(),
            Self::Adapter(case) => case.run(),
        }
    }

    fn fields(&self) -> &CaseFields {
        match self {
            Self::Generic(case) => &case.fields,
            Self::Adapter(case) => &case.fields,
        }
    }
}

/// How the suite builder turns records into cases.
#[derive(Clone)]
pub enum CaseVariant {
    /// Call the subject directly with args/keywords.
    Generic(Arc<dyn Subject>),
    /// Configure an instance from `partials`, then render.
    ConfigureThenInvoke(Arc<dyn SubjectFactory>),
}

impl CaseVariant {
    /// Construct one case from one record.
    pub fn build(&self, record: &TestRecord, group: Option<&str>) -> RecordResult<SpecCase> {
        match self {
            Self::Generic(subject) => {
                GenericCase::from_record(record, group, Arc::clone(subject)).map(SpecCase::Generic)
            }
            Self::ConfigureThenInvoke(factory) => {
                AdapterCase::from_record(record, group, Arc::clone(factory)).map(SpecCase::Adapter)
            }
        }
    }
}

/// Deep structural equality between oracle and actual result.
fn compare(expected: &Value, actual: Value) -> CaseOutcome {
    if *expected == actual {
        CaseOutcome::Pass
    } else {
        CaseOutcome::Fail {
            expected: expected.clone(),
            actual,
        }
    }
}

fn error_outcome(message: &str) -> CaseOutcome {
    CaseOutcome::Error {
        message: message.to_string(),
    }
}
