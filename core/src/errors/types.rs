//! Error type definitions for authentication, token management and
//! validation operations.
//!
//! The api layer maps these onto transport-level responses; no messages are
//! swallowed or recovered here.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases surface identically.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User not found")]
    UserNotFound,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors, including natural-key collisions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },

    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages_carry_fields() {
        let err = ValidationError::DuplicateValue {
            field: "email".to_string(),
        };
        assert!(err.to_string().contains("email"));

        let err = ValidationError::InvalidQuantity { quantity: 0 };
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_auth_error_message_is_generic() {
        // No hint about whether the email or the password was wrong.
        let msg = AuthError::AuthenticationFailed.to_string();
        assert!(!msg.to_lowercase().contains("password"));
        assert!(!msg.to_lowercase().contains("email"));
    }
}
