//! Transport service - orchestrates different transport types.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::CalculatorServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Transport service - manages the transport layer for the server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the transport with the given server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: CalculatorServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "http")]
    #[test]
    fn test_service_keeps_config() {
        let service = TransportService::new(TransportConfig::http(9090, "127.0.0.1"));
        assert_eq!(service.config().description(), "HTTP on 127.0.0.1:9090");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_service_stdio_config() {
        let service = TransportService::new(TransportConfig::stdio());
        assert!(service.config().is_stdio());
    }
}
