//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City is not part of the fixed registry
    #[error("City not found: {0}")]
    UnknownCity(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Invalid geographic coordinates
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl DomainError {
    /// Create an unknown-city error
    pub fn unknown_city(name: impl Into<String>) -> Self {
        Self::UnknownCity(name.into())
    }
}
