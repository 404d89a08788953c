//! Transport layer for the calculator server.
//!
//! - **HTTP**: REST calculator API plus JSON-RPC tool calls - feature: `http`
//! - **STDIO**: MCP tools over standard input/output - feature: `stdio`
//!
//! Both transports delegate to the same [`CalculatorServer`](crate::core::CalculatorServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
