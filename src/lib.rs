//! Calculator Server Library
//!
//! A small calculator service exposed as a JSON HTTP API and as MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **arithmetic**: pure numeric operations and their domain errors
//!   - **calculator**: request/result models and the operation dispatcher
//!   - **tools**: MCP tool definitions over the calculator and arithmetic domains
//!
//! # Example
//!
//! ```rust
//! use calc_server::domains::calculator::{CalculationRequest, dispatch};
//!
//! let result = dispatch(&CalculationRequest::new(10.0, Some(5.0), "add")).unwrap();
//! assert_eq!(result.result, 15.0);
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CalculatorServer, Config, Error, Result};
