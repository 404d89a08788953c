//! Calculator domain module.
//!
//! Turns a named calculation request into an arithmetic engine call and a
//! shaped response.
//!
//! ## Architecture
//!
//! - `model.rs` - Request, result and error envelope records
//! - `dispatcher.rs` - Validation and operation routing
//! - `history.rs` - Static demonstration history
//! - `error.rs` - Dispatch error types

mod dispatcher;
mod error;
mod history;
mod model;

pub use dispatcher::{dispatch, dispatch_value, evaluate};
pub use error::DispatchError;
pub use history::sample_history;
pub use model::{BAD_REQUEST, CalculationRequest, CalculationResult, Operation, OperationError};
