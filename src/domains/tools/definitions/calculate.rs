//! Calculate tool definition.
//!
//! Runs a named operation through the calculation dispatcher. Argument
//! shape errors are reported the same way as dispatch errors.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{error_result, json_result};
use crate::domains::calculator::{CalculationRequest, dispatch_value};

#[cfg(feature = "http")]
use super::common::to_http_value;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Calculate tool - add, subtract, multiply, divide, power or sqrt.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform a calculation. Supported operations: add, subtract, multiply, divide, power, sqrt. Operand 'b' is required for every operation except sqrt.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(arguments: serde_json::Value) -> CallToolResult {
        info!("Calculate tool called");

        match dispatch_value(arguments) {
            Ok(result) => json_result(&result),
            Err(e) => error_result(&e.message),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        Ok(to_http_value(Self::execute(arguments)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CalculationRequest>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok::<_, McpError>(Self::execute(serde_json::Value::Object(args))) }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::first_text;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calculate_add() {
        let result = CalculateTool::execute(json!({ "a": 10, "b": 5, "operation": "add" }));
        assert!(!result.is_error.unwrap_or(false));

        let value: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(
            value,
            json!({ "result": 15.0, "operation": "add", "a": 10.0, "b": 5.0 })
        );
    }

    #[test]
    fn test_calculate_divide_by_zero() {
        let result = CalculateTool::execute(json!({ "a": 10, "b": 0, "operation": "divide" }));
        assert!(result.is_error.unwrap_or(false));
        assert!(first_text(&result).contains("division by zero"));
    }

    #[test]
    fn test_calculate_invalid_operation() {
        let result = CalculateTool::execute(json!({ "a": 1, "b": 2, "operation": "modulo" }));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), "Invalid operation");
    }

    #[test]
    fn test_calculate_tool_metadata() {
        let tool = CalculateTool::to_tool();
        assert_eq!(tool.name, "calculate");
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[test]
    fn test_calculate_malformed_arguments() {
        let result = CalculateTool::execute(json!({ "b": 2, "operation": "add" }));
        assert!(result.is_error.unwrap_or(false));
        assert!(first_text(&result).contains("missing field `a`"));

        let result = CalculateTool::execute(json!({ "a": "ten", "operation": "add" }));
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_calculate_http_handler() {
        let value = CalculateTool::http_handler(json!({ "a": 16, "operation": "sqrt" })).unwrap();
        assert_eq!(value["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_calculate_http_handler_missing_param() {
        let value = CalculateTool::http_handler(json!({ "b": 2 })).unwrap();
        assert_eq!(value["isError"], true);
        assert!(
            value["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("missing field `a`")
        );
    }
}
