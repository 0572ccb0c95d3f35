//! Mapping from domain errors to HTTP responses.
//!
//! This is the single place where the error families defined in `od_core`
//! become transport-level responses. Nothing is swallowed: anything not
//! explicitly mapped surfaces as a 500.

use actix_web::HttpResponse;
use tracing::error;

use od_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use od_shared::types::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),

        DomainError::ValidationErr(ValidationError::DuplicateValue { field }) => {
            HttpResponse::Conflict().json(ErrorResponse::new(
                "duplicate_entry",
                format!("A record with this {} already exists", field),
            ))
        }

        DomainError::ValidationErr(validation_err) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", validation_err.to_string())),

        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }

        DomainError::Auth(auth_err) => match auth_err {
            AuthError::AuthenticationFailed | AuthError::UserNotFound => HttpResponse::Unauthorized()
                .json(ErrorResponse::new(
                    "authentication_failed",
                    "Invalid credentials",
                )),
            AuthError::AccountDisabled => HttpResponse::Forbidden().json(ErrorResponse::new(
                "account_disabled",
                "This account has been disabled",
            )),
            AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(
                ErrorResponse::new("insufficient_permissions", "Insufficient permissions"),
            ),
        },

        DomainError::Token(token_err) => {
            let code = match token_err {
                TokenError::TokenExpired => "token_expired",
                _ => "invalid_token",
            };
            HttpResponse::Unauthorized().json(ErrorResponse::new(code, token_err.to_string()))
        }

        DomainError::Unauthorized => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "Unauthorized access")),

        DomainError::Database { message } => {
            error!("database error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }

        DomainError::Internal { message } => {
            error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert DTO validation failures into a 400 response with field details
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let mut details = std::collections::HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors),
    );

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}
