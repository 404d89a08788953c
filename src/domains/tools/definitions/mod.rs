//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

mod common;

pub mod calculate;
pub mod factorial;
pub mod gcd;
pub mod lcm;
pub mod list_operations;

pub use calculate::CalculateTool;
pub use factorial::{FactorialParams, FactorialTool};
pub use gcd::{GcdTool, IntegerPairParams};
pub use lcm::LcmTool;
pub use list_operations::{ListOperationsParams, ListOperationsTool};
