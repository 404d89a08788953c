//! STDIO transport implementation.
//!
//! Serves the calculator tools as an MCP server over stdin/stdout.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::CalculatorServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: CalculatorServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
