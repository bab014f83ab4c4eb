//! Error types for document loading

/// Errors raised while loading a specification document.
///
/// Both variants carry the group name so the operator can tell which suite
/// was abandoned. Neither is retried; a load failure aborts building the
/// affected suite only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The document location was unreachable or answered with a non-success
    /// status.
    #[error("failed to retrieve specification `{group}`: {reason}")]
    Retrieval { group: String, reason: String },

    /// The response body was not well-formed JSON of the expected shape, or
    /// lacked a `tests` array.
    #[error("failed to parse specification `{group}`: {reason}")]
    Parse { group: String, reason: String },
}

impl LoadError {
    /// The group name the failure belongs to.
    pub fn group(&self) -> &str {
        match self {
            Self::Retrieval { group, .. } | Self::Parse { group, .. } => group,
        }
    }
}

/// Result type alias for document loading.
pub type LoadResult<T> = Result<T, LoadError>;
