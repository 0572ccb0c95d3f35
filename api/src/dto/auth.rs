//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::value_objects::AuthenticationToken;

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: Uuid,
}

impl From<AuthenticationToken> for LoginResponse {
    fn from(token: AuthenticationToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user_id: token.user_id,
        }
    }
}
