/// Errors from repository operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write would duplicate a registered-unique field value within a
    /// type tag. The offending write is rejected in full.
    #[error("{kind}.{field} must be unique")]
    UniquenessViolation { kind: String, field: String },

    /// `update` targeted an identifier absent from its bucket.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// Serialization or deserialization failure while converting an
    /// entity to or from its stored representation.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;
