//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/LLM error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error (air-quality provider, SMS gateway)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::unknown_city("Atlantis"));
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }

    #[test]
    fn inference_error_message() {
        let err = ApplicationError::Inference("model timed out".to_string());
        assert_eq!(err.to_string(), "Inference error: model timed out");
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("HTTP 503".to_string());
        assert_eq!(err.to_string(), "External service error: HTTP 503");
    }
}
