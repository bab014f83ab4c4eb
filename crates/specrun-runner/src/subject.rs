//! Subject-under-test seams.

use serde_json::{Map, Value};

/// Failure reported by a subject under test during invocation.
///
/// Distinct from a wrong-but-valid result: a case whose subject returns
/// `Err` is recorded as an ERROR, not a FAIL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SubjectError(String);

impl SubjectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type alias for subject invocations.
pub type SubjectResult = Result<Value, SubjectError>;

/// A callable implementation under test.
///
/// Receives the record's positional arguments in order plus the residual
/// keyword mapping, and returns a comparable value.
pub trait Subject {
    fn call(&self, args: &[Value], keywords: &Map<String, Value>) -> SubjectResult;
}

/// Plain closures work as subjects.
impl<F> Subject for F
where
    F: Fn(&[Value], &Map<String, Value>) -> SubjectResult,
{
    fn call(&self, args: &[Value], keywords: &Map<String, Value>) -> SubjectResult {
        self(args, keywords)
    }
}

/// A configured instance exposing a render-like operation.
pub trait RenderInstance {
    fn render(&self, template: &str, data: &Value) -> SubjectResult;
}

/// Factory for configure-then-invoke subjects.
///
/// Phase one of the adapter protocol: build an instance from the record's
/// `partials` mapping. Phase two invokes [`RenderInstance::render`] on it.
pub trait SubjectFactory {
    fn configure(&self, partials: &Map<String, Value>)
        -> Result<Box<dyn RenderInstance>, SubjectError>;
}
