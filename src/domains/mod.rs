//! Domains module containing business logic organized by bounded contexts.
//!
//! - **arithmetic**: pure numeric operations
//! - **calculator**: request validation and operation dispatch
//! - **tools**: MCP tools built on the two above

pub mod arithmetic;
pub mod calculator;
pub mod tools;
