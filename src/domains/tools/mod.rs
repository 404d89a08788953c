//! Tools domain module.
//!
//! Exposes the arithmetic engine and the calculation dispatcher as MCP
//! tools that clients can call over STDIO or JSON-RPC over HTTP.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the rmcp server handler
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, `execute()`, `http_handler()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
