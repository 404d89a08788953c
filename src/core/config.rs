//! Configuration management for the calculator server.
//!
//! Configuration is populated from defaults and then overridden by
//! environment variables (optionally loaded from a `.env` file).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Service name reported by the health endpoint and to MCP clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "calc-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
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
    /// Environment variables are prefixed with `CALC_`, for example
    /// `CALC_SERVER_NAME` or `CALC_LOG_LEVEL`. Transport variables are
    /// documented on [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("CALC_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("CALC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("CALC_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration can be served.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }

        #[cfg(feature = "http")]
        {
            if let TransportConfig::Http(http) = &self.transport {
                if !http.rpc_path.starts_with('/') {
                    return Err(Error::config(format!(
                        "JSON-RPC path must start with '/': {}",
                        http.rpc_path
                    )));
                }
                if http.rpc_path == "/health" || http.rpc_path.starts_with("/api/") {
                    return Err(Error::config(format!(
                        "JSON-RPC path collides with a REST route: {}",
                        http.rpc_path
                    )));
                }
            }
        }

        Ok(())
    }
}
