//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthenticationToken;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service orchestrating the user repository and the token
/// service
pub struct AuthService<U: UserRepository> {
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for JWT issuance and verification
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Check credentials and issue an access token.
    ///
    /// A missing user and a wrong password both surface as
    /// `AuthenticationFailed`; the caller learns nothing about which one it
    /// was. Deactivated accounts are rejected with `AccountDisabled`.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthenticationToken> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("authentication attempt for unknown email");
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        if !user.is_active {
            warn!(user_id = %user.id, "authentication attempt for disabled account");
            return Err(AuthError::AccountDisabled.into());
        }

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| DomainError::Auth(AuthError::AuthenticationFailed))?;
        if !password_matches {
            warn!(user_id = %user.id, "authentication attempt with wrong password");
            return Err(AuthError::AuthenticationFailed.into());
        }

        let token = self.token_service.issue_token(&user)?;
        debug!(user_id = %user.id, "access token issued");
        Ok(token)
    }

    /// Verify an access token and load the user it was issued for.
    ///
    /// Fails with a token error if the token is invalid and with
    /// `AuthenticationFailed` if the embedded user no longer exists.
    pub async fn validate_token(&self, token: &str) -> DomainResult<User> {
        let claims = self.token_service.verify_access_token(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailed))?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }
}
