//! Configuration types for the OrderDesk server
//!
//! All configuration is environment-driven: each section exposes a
//! `from_env` constructor with sensible development defaults, and
//! `AppConfig::from_env` assembles the whole thing for the binary.

mod auth;
mod database;
mod environment;
mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime environment (development/production)
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}
