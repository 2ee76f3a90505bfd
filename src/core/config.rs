//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Fixed base origin of the MotorAPI.dk service.
pub const DEFAULT_BASE_URL: &str = "https://v1.motorapi.dk";

/// Demo API key used when `MOTORAPI_KEY` is not set.
const DEFAULT_API_KEY: &str = "ggsysjljhuwad03hcxvlwnqgf5toihft";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// MotorAPI.dk endpoint and credentials.
    pub motorapi: MotorApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the MotorAPI.dk remote service.
#[derive(Clone, Serialize, Deserialize)]
pub struct MotorApiConfig {
    /// Base origin for all lookup requests.
    pub base_url: String,

    /// API key sent in the `X-AUTH-TOKEN` header on every request.
    pub api_key: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for MotorApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotorApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for MotorApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "motorapi-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            motorapi: MotorApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MOTORAPI_KEY`, and `MOTORAPI_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MOTORAPI_BASE_URL") {
            config.motorapi.base_url = base_url;
        }

        if let Ok(api_key) = std::env::var("MOTORAPI_KEY") {
            config.motorapi.api_key = api_key;
            info!("MotorAPI key loaded from environment");
        } else {
            warn!(
                "Using default MotorAPI demo key. For your own quota, \
                 set MOTORAPI_KEY (get a key at https://www.motorapi.dk)"
            );
        }

        config
    }
}
