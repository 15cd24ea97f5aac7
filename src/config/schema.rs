//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the product API server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// API-key authentication settings.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Startup seeding of sample data.
    pub seed: SeedConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// API-key authentication configuration.
///
/// A single shared static secret gates the whole `/api/products` namespace.
/// `allow_anonymous_list` is an explicit opt-in for unauthenticated
/// `GET /api/products` (exact path, GET only); everything else always
/// requires the key.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// The shared API key clients must supply via the `x-api-key` header.
    /// Overridable via the PRODUCT_API_KEY environment variable.
    pub api_key: String,

    /// Let unauthenticated clients list products (GET /api/products only).
    pub allow_anonymous_list: bool,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Startup seed configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Insert the sample catalog into an empty store at startup.
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.seed.enabled);
        assert!(!config.auth.allow_anonymous_list);
        assert!(config.auth.api_key.is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [auth]
            api_key = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.api_key, "secret");
        // Unspecified sections fall back to defaults
        assert_eq!(config.limits.max_body_bytes, 1024 * 1024);
    }
}
