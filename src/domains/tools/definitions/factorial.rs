//! Factorial tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{error_result, json_result};
use crate::domains::arithmetic;

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the factorial tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FactorialParams {
    /// Non-negative integer, at most 20.
    pub n: i64,
}

/// Factorial tool - computes n! for 0 <= n <= 20.
pub struct FactorialTool;

impl FactorialTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "factorial";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Compute the factorial of a non-negative integer n (0 <= n <= 20).";

    #[instrument(skip_all, fields(n = params.n))]
    pub fn execute(params: &FactorialParams) -> CallToolResult {
        info!("Factorial tool called");

        match arithmetic::factorial(params.n) {
            Ok(result) => json_result(&serde_json::json!({ "n": params.n, "result": result })),
            Err(e) => error_result(&e.to_string()),
        }
    }

    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: FactorialParams = parse_arguments(arguments)?;
        Ok(to_http_value(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FactorialParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: FactorialParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::first_text;
    use super::*;

    #[test]
    fn test_factorial_execute() {
        let result = FactorialTool::execute(&FactorialParams { n: 10 });
        assert!(!result.is_error.unwrap_or(false));

        let value: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(value["result"], 3_628_800);
    }

    #[test]
    fn test_factorial_out_of_range() {
        let result = FactorialTool::execute(&FactorialParams { n: 21 });
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), "factorial too large to calculate");

        let result = FactorialTool::execute(&FactorialParams { n: -3 });
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_factorial_http_handler_rejects_fraction() {
        let result = FactorialTool::http_handler(serde_json::json!({ "n": 2.5 }));
        assert!(result.is_err());
    }
}
