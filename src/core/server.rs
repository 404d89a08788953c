//! Calculator server handler.
//!
//! Implements the MCP `ServerHandler` by routing tool calls to the tool
//! definitions in `domains/tools/definitions/`, and exposes the same tools
//! to the HTTP transport through [`ToolRegistry`].

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "Calculator server. Use 'calculate' for add, subtract, multiply, \
     divide, power and sqrt; 'factorial', 'gcd' and 'lcm' for integer arithmetic; \
     'list_operations' to discover the calculate operations.";

/// The main server handler.
///
/// Cheap to clone; configuration is shared behind an `Arc` and nothing is
/// mutated after construction.
#[derive(Clone)]
pub struct CalculatorServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl CalculatorServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Server usage instructions reported to MCP clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        ToolRegistry::new().call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
