//! Authentication token value object returned by the auth use-cases.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An issued access token together with its metadata. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationToken {
    /// The signed access token
    pub access_token: String,

    /// Token type label (always "Bearer")
    pub token_type: String,

    /// Remaining validity in seconds at issue time
    pub expires_in: i64,

    /// User the token was issued for
    pub user_id: Uuid,
}

impl AuthenticationToken {
    /// Creates a bearer token value object
    pub fn bearer(access_token: impl Into<String>, user_id: Uuid, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_in,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        let user_id = Uuid::new_v4();
        let token = AuthenticationToken::bearer("eyJ...", user_id, 3600);

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.user_id, user_id);
    }
}
