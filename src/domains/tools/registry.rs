//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{CalculateTool, FactorialTool, GcdTool, LcmTool, ListOperationsTool};

/// Tool registry - manages all available tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CalculateTool::NAME,
            FactorialTool::NAME,
            GcdTool::NAME,
            LcmTool::NAME,
            ListOperationsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CalculateTool::to_tool(),
            FactorialTool::to_tool(),
            GcdTool::to_tool(),
            LcmTool::to_tool(),
            ListOperationsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CalculateTool::NAME => CalculateTool::http_handler(arguments),
            FactorialTool::NAME => FactorialTool::http_handler(arguments),
            GcdTool::NAME => GcdTool::http_handler(arguments),
            LcmTool::NAME => LcmTool::http_handler(arguments),
            ListOperationsTool::NAME => ListOperationsTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::new().tool_names();
        assert_eq!(
            names,
            vec!["calculate", "factorial", "gcd", "lcm", "list_operations"]
        );
    }

    #[test]
    fn test_all_tools_match_names() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, ToolRegistry::new().tool_names());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_calculate() {
        let result = ToolRegistry::new().call_tool(
            "calculate",
            serde_json::json!({ "a": 2, "b": 3, "operation": "power" }),
        );
        assert_eq!(result.unwrap()["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let result = ToolRegistry::new().call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "unknown"));
    }
}
