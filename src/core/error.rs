//! Error types and handling for the calculator server.
//!
//! Startup failures: invalid configuration or a transport that could not
//! be brought up. Calculation and tool errors never reach this level; they
//! are turned into responses where they occur.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::from(TransportError::init("stdin closed"));
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: stdin closed"
        );

        let err = Error::config("rpc path must start with '/'");
        assert_eq!(
            err.to_string(),
            "Configuration error: rpc path must start with '/'"
        );
    }
}
