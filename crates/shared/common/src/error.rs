//! Unified error handling for the catalog services.
//!
//! Authentication failures and missing entities are normally reported as
//! plain values (a `false` login, a `None` lookup, a no-op enrollment).
//! `AppError` covers what is left: the opt-in strict policy, operations
//! that need a session, and storage conflicts.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            // Hide details for internal errors
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        assert_eq!(
            AppError::from(DomainError::validation("Title cannot be empty")),
            AppError::Validation("Title cannot be empty".to_string())
        );
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        let err = AppError::internal("lock poisoned at store.rs:42");
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_conflict_message_not_duplicated() {
        assert_eq!(AppError::conflict("Course").user_message(), "Course already exists");
        assert_eq!(
            AppError::conflict("Course already exists").user_message(),
            "Course already exists"
        );
    }
}
