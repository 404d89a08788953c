//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP tools over standard input/output.
    #[cfg(feature = "stdio")]
    Stdio,

    /// REST API plus JSON-RPC tool calls over HTTP.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

/// First parseable port among `CALC_HTTP_PORT` and `PORT`.
#[cfg(feature = "http")]
fn port_from_env() -> u16 {
    for var in ["CALC_HTTP_PORT", "PORT"] {
        if let Ok(value) = std::env::var(var) {
            match value.parse() {
                Ok(port) => return port,
                Err(_) => warn!("Ignoring invalid {}: '{}'", var, value),
            }
        }
    }
    DEFAULT_HTTP_PORT
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            Self::Stdio
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    ///
    /// `CALC_TRANSPORT` selects the transport; unknown values fall back to
    /// the default transport with a warning. The HTTP port is read from
    /// `CALC_HTTP_PORT`, falling back to the conventional `PORT`.
    pub fn from_env() -> Self {
        let transport = std::env::var("CALC_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "" => Self::default_from_env(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::http_from_env(),
            other => {
                warn!("Unknown CALC_TRANSPORT '{}', using the default transport", other);
                Self::default_from_env()
            }
        }
    }

    fn default_from_env() -> Self {
        #[cfg(feature = "http")]
        {
            Self::http_from_env()
        }

        #[cfg(not(feature = "http"))]
        {
            Self::default()
        }
    }

    #[cfg(feature = "http")]
    fn http_from_env() -> Self {
        let host = std::env::var("CALC_HTTP_HOST").unwrap_or_else(|_| default_host());
        let rpc_path = std::env::var("CALC_HTTP_RPC_PATH").unwrap_or_else(|_| default_rpc_path());
        let enable_cors = std::env::var("CALC_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);
        Self::Http(HttpConfig {
            port: port_from_env(),
            host,
            rpc_path,
            enable_cors,
        })
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (MCP tools)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
        }
    }

    /// Check if this transport is STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
