//! Least common multiple tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{error_result, json_result};
use super::gcd::IntegerPairParams;
use crate::domains::arithmetic;

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// LCM tool - least common multiple of two integers.
pub struct LcmTool;

impl LcmTool {
    pub const NAME: &'static str = "lcm";

    pub const DESCRIPTION: &'static str =
        "Compute the least common multiple of two integers. Returns 0 when either operand is 0.";

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &IntegerPairParams) -> CallToolResult {
        info!("LCM tool called");

        match arithmetic::lcm(params.a, params.b) {
            Ok(result) => {
                json_result(&serde_json::json!({ "a": params.a, "b": params.b, "result": result }))
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: IntegerPairParams = parse_arguments(arguments)?;
        Ok(to_http_value(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<IntegerPairParams>(),
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
                let params: IntegerPairParams =
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
    fn test_lcm_execute() {
        let result = LcmTool::execute(&IntegerPairParams { a: 12, b: 8 });
        assert!(!result.is_error.unwrap_or(false));
        let value: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(value["result"], 24);
    }

    #[test]
    fn test_lcm_zero_operand() {
        let result = LcmTool::execute(&IntegerPairParams { a: 0, b: 9 });
        let value: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(value["result"], 0);
    }

    #[test]
    fn test_lcm_overflow_is_tool_error() {
        let result = LcmTool::execute(&IntegerPairParams {
            a: i64::MAX,
            b: i64::MAX - 1,
        });
        assert!(result.is_error.unwrap_or(false));
    }
}
