//! Value objects shared between services and the api layer.

pub mod auth_token;

pub use auth_token::AuthenticationToken;
