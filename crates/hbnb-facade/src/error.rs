use thiserror::Error;

use hbnb_store::StoreError;
use hbnb_types::ModelError;

/// Errors surfaced by facade operations.
///
/// Each variant maps to one transport-level class: `Conflict` → 409,
/// `NotFound` → 404, `Validation` → 400. `Internal` covers storage
/// faults that no client action can fix.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// A write would duplicate a unique field value (e.g. a taken email).
    #[error("{kind}.{field} already in use")]
    Conflict { kind: String, field: String },

    /// The referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// A field value failed domain validation.
    #[error(transparent)]
    Validation(#[from] ModelError),

    /// Storage-level failure (e.g. a record that fails to decode).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for FacadeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniquenessViolation { kind, field } => Self::Conflict { kind, field },
            StoreError::NotFound { kind, id } => Self::NotFound { kind, id },
            StoreError::Serialization(msg) => Self::Internal(msg),
        }
    }
}

/// Result alias for facade operations.
pub type FacadeResult<T> = Result<T, FacadeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_maps_to_conflict() {
        let err: FacadeError = StoreError::UniquenessViolation {
            kind: "User".into(),
            field: "email".into(),
        }
        .into();
        assert!(matches!(err, FacadeError::Conflict { .. }));
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: FacadeError = StoreError::NotFound {
            kind: "Place".into(),
            id: "x".into(),
        }
        .into();
        assert!(matches!(err, FacadeError::NotFound { .. }));
    }

    #[test]
    fn model_error_maps_to_validation() {
        let err: FacadeError = ModelError::EmptyField { field: "title" }.into();
        assert!(matches!(err, FacadeError::Validation(_)));
    }
}
