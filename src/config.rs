//! Environment-driven configuration for the data core.

use crate::error::{FoodShareError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct FoodShareConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

impl Default for FoodShareConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/foodshare_development".to_string(),
            max_connections: 5,
            acquire_timeout_ms: 30_000,
        }
    }
}

impl FoodShareConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(max_connections) = std::env::var("FOODSHARE_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                FoodShareError::Configuration(format!("Invalid max_connections: {e}"))
            })?;
        }

        if let Ok(timeout) = std::env::var("FOODSHARE_ACQUIRE_TIMEOUT_MS") {
            config.acquire_timeout_ms = timeout.parse().map_err(|e| {
                FoodShareError::Configuration(format!("Invalid acquire_timeout_ms: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = FoodShareConfig::default();
        assert!(config.database_url.starts_with("postgresql://"));
        assert!(config.max_connections > 0);
    }
}
