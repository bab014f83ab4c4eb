//! Error types for record decomposition

/// Errors raised while decomposing a test record into case fields.
///
/// Any of these aborts the suite build for the affected group: a record
/// without an oracle (or a name to report it under) cannot be run, and a
/// partially built suite would silently drop cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecordError {
    #[error("record is missing the required `name` field")]
    MissingName,

    #[error("record `{0}` has a non-string `name` field")]
    InvalidName(String),

    #[error("record `{name}` is missing the required `expected` field")]
    MissingExpected { name: String },

    #[error("record `{name}` has a non-string `desc` field")]
    InvalidDesc { name: String },

    #[error("record `{name}` has a non-array `args` field")]
    InvalidArgs { name: String },

    #[error("record `{name}` has a non-object `keywords` field")]
    InvalidKeywords { name: String },
}

/// Result type alias for record decomposition.
pub type RecordResult<T> = Result<T, MalformedRecordError>;
