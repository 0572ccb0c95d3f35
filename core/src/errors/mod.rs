//! Domain-specific error types and error handling.

mod types;

// Re-export all error families
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a missing-resource error
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a natural-key collision
    pub fn duplicate(field: impl Into<String>) -> Self {
        DomainError::ValidationErr(ValidationError::DuplicateValue {
            field: field.into(),
        })
    }

    /// Shorthand for wrapping a persistence failure
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
