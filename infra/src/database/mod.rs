//! Database connection management.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use od_core::errors::DomainError;
use od_shared::config::DatabaseConfig;

pub mod mysql;

/// Create a MySQL connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    info!(max_connections = config.max_connections, "database pool created");
    Ok(pool)
}
