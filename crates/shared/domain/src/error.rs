//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of how the presentation layer reports them.

use thiserror::Error;
use validator::ValidationErrors;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Keeps only the first field message, which is what a form shows.
impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        DomainError::Validation(message)
    }
}

impl From<std::convert::Infallible> for DomainError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
