//! Runtime environment detection

use serde::{Deserialize, Serialize};

/// Runtime environment the server is deployed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read the environment from `APP_ENV`, defaulting to development
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_check() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
