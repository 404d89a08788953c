//! Greatest common divisor tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::json_result;
use crate::domains::arithmetic;

#[cfg(feature = "http")]
use super::common::{parse_arguments, to_http_value};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Integer operand pair shared by the gcd and lcm tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IntegerPairParams {
    /// First integer operand.
    pub a: i64,
    /// Second integer operand.
    pub b: i64,
}

/// GCD tool - greatest common divisor of two integers.
pub struct GcdTool;

impl GcdTool {
    pub const NAME: &'static str = "gcd";

    pub const DESCRIPTION: &'static str =
        "Compute the greatest common divisor of two integers. gcd(0, b) is |b|.";

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &IntegerPairParams) -> CallToolResult {
        info!("GCD tool called");
        let result = arithmetic::gcd(params.a, params.b);
        json_result(&serde_json::json!({ "a": params.a, "b": params.b, "result": result }))
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
