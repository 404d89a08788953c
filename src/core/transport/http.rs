//! HTTP transport implementation.
//!
//! Serves the calculator REST API and a JSON-RPC endpoint for tool calls:
//!
//! - `GET  /health` - service identity probe
//! - `GET  /api/v1/` - API information (also served without the trailing slash)
//! - `POST /api/v1/calculate` - run a calculation
//! - `GET  /api/v1/operations` - supported operation names
//! - `GET  /api/v1/history` - fixed sample of past calculations
//! - `POST <rpc_path>` - JSON-RPC 2.0 (`initialize`, `tools/list`, `tools/call`)

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use ::http::StatusCode;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportConfig, TransportError, TransportResult, config::HttpConfig};
use crate::core::CalculatorServer;
use crate::domains::calculator::{
    CalculationRequest, CalculationResult, Operation, OperationError, dispatch, sample_history,
};

/// MCP protocol revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

// ============================================================================
// Response Models
// ============================================================================

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// API information response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Supported operation names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationsResponse {
    pub operations: Vec<String>,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

// ============================================================================
// JSON-RPC Models
// ============================================================================

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::error(None, -32700, msg)
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: CalculatorServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts HTTP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Http(http_config) => Some(Self::new(http_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: CalculatorServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Calculate: POST /api/v1/calculate");
        info!("  → JSON-RPC:  POST {}", self.config.rpc_path);
        info!("  → Health:    GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the HTTP router for the given server.
pub fn build_router(server: CalculatorServer, config: &HttpConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1", get(root_handler))
        .route("/api/v1/", get(root_handler))
        .route("/api/v1/calculate", post(calculate))
        .route("/api/v1/operations", get(list_operations))
        .route("/api/v1/history", get(history))
        .route(&config.rpc_path, post(handle_rpc))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { server });

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

// ============================================================================
// REST Handlers
// ============================================================================

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.server.name().to_string(),
        version: state.server.version().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Calculator API".to_string(),
        version: state.server.version().to_string(),
        status: "running".to_string(),
    })
}

/// Perform a calculation.
///
/// Body rejections (malformed JSON, missing `a` or `operation`, wrong
/// content type) are reported in the same envelope as dispatch errors.
#[instrument(skip_all)]
async fn calculate(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, OperationError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected calculation body: {}", rejection.body_text());
        OperationError::bad_request(rejection.body_text())
    })?;

    Ok(Json(dispatch(&request)?))
}

/// List available operations.
async fn list_operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: Operation::names().into_iter().map(String::from).collect(),
    })
}

/// Calculation history (fixed sample).
async fn history() -> Json<Vec<CalculationResult>> {
    Json(sample_history())
}

// ============================================================================
// JSON-RPC Handlers
// ============================================================================

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    payload: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Json<JsonRpcResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected JSON-RPC body: {}", rejection.body_text());
            return Json(JsonRpcResponse::parse_error(rejection.body_text()));
        }
    };

    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    Json(process_request(&state, request))
}

/// Process a JSON-RPC request and return the response.
fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": state.server.name(),
                    "version": state.server.version()
                },
                "instructions": state.server.instructions()
            }),
        ),

        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),

        "tools/list" => JsonRpcResponse::success(
            request.id,
            serde_json::json!({ "tools": state.server.list_tools() }),
        ),

        "tools/call" => handle_tools_call(state, request),

        // Stateless over HTTP; acknowledge and move on
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, serde_json::Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle tools/call request.
fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match state.server.call_tool(name, arguments) {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
