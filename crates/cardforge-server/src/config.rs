//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// MongoDB connection string, if a database is configured
    pub database_url: Option<String>,

    /// Database name inside the MongoDB deployment
    pub database_name: String,

    /// Maximum request body size in bytes, unlimited when unset
    pub max_body_bytes: Option<usize>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port
                    .trim()
                    .parse()
                    .map_err(|_| ApiError::Config(format!("Invalid PORT value: {}", port)))?,
                None => defaults.port,
            },
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_name: lookup("DATABASE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.database_name),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .map(|bytes| {
                    bytes.trim().parse().map_err(|_| {
                        ApiError::Config(format!("Invalid MAX_BODY_BYTES value: {}", bytes))
                    })
                })
                .transpose()?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: "cardforge".to_string(),
            max_body_bytes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.database_url.is_none());
        assert_eq!(config.database_name, "cardforge");
        assert!(config.max_body_bytes.is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "cards"),
            ("MAX_BODY_BYTES", "1048576"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(
            config.database_url.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(config.database_name, "cards");
        assert_eq!(config.max_body_bytes, Some(1_048_576));
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
