//! Helpers shared by the calculator tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;
#[cfg(feature = "http")]
use serde::de::DeserializeOwned;

/// Create a success result carrying `value` as pretty-printed JSON text.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Deserialize tool arguments into a params struct.
#[cfg(feature = "http")]
pub fn parse_arguments<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Shape a tool result the way the JSON-RPC `tools/call` response expects.
#[cfg(feature = "http")]
pub fn to_http_value(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Text of the first content item, if it is text.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
