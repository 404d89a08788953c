//! List operations tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::json_result;
use crate::domains::calculator::Operation;

#[cfg(feature = "http")]
use super::common::to_http_value;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// The list operations tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOperationsParams {}

/// Lists the operation names accepted by the calculate tool.
pub struct ListOperationsTool;

impl ListOperationsTool {
    pub const NAME: &'static str = "list_operations";

    pub const DESCRIPTION: &'static str =
        "List the operation names accepted by the calculate tool.";

    pub fn execute() -> CallToolResult {
        info!("List operations tool called");
        json_result(&serde_json::json!({ "operations": Operation::names() }))
    }

    /// Arguments are ignored.
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        Ok(to_http_value(Self::execute()))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListOperationsParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, McpError>(Self::execute()) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::first_text;
    use super::*;

    #[test]
    fn test_list_operations() {
        let result = ListOperationsTool::execute();
        let value: serde_json::Value = serde_json::from_str(first_text(&result)).unwrap();
        assert_eq!(
            value["operations"],
            serde_json::json!(["add", "subtract", "multiply", "divide", "power", "sqrt"])
        );
    }
}
