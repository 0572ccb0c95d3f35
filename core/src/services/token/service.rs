//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthenticationToken;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens (HS256)
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticationToken)` - The issued token with its metadata
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_token(&self, user: &User) -> Result<AuthenticationToken, DomainError> {
        let claims = Claims::new_access_token(
            user.id,
            user.role.as_str(),
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry,
        );
        let token = self.encode_jwt(&claims)?;

        Ok(AuthenticationToken::bearer(
            token,
            user.id,
            claims.remaining_seconds(),
        ))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer
                    | jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        DomainError::Token(TokenError::InvalidClaims)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
