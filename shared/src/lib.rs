//! Shared utilities and common types for the OrderDesk server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination and response envelopes
//! - Utility functions (format validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, PaginatedResponse, Pagination};
