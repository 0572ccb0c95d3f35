//! Token service configuration

use od_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric secret for HS256 signing
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Issuer claim stamped into and required of every token
    pub issuer: String,

    /// Audience claim stamped into and required of every token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            access_token_expiry: 3600,
            issuer: String::from("orderdesk"),
            audience: String::from("orderdesk-api"),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_token_expiry: config.access_token_expiry,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
