use thiserror::Error;

/// Errors produced by domain model validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("{field} must be a non-empty string")]
    EmptyField { field: &'static str },

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("price_per_night must be a finite number >= 0, got {0}")]
    InvalidPrice(f64),

    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("invalid entity id: {0:?}")]
    InvalidId(String),
}

/// Result alias for model validation.
pub type Result<T> = std::result::Result<T, ModelError>;
