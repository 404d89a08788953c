//! Calculation dispatch error types.

use thiserror::Error;

use crate::domains::arithmetic::ArithmeticError;

/// Errors that can occur while dispatching a calculation.
///
/// `InvalidOperation` and `MissingOperand` are validation failures;
/// `Domain` wraps an engine precondition failure. All of them surface to
/// callers as a "Bad Request" [`OperationError`](super::OperationError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The operation name is not in the supported set.
    #[error("Invalid operation")]
    InvalidOperation,

    /// A required operand was not supplied.
    #[error("operand '{operand}' is required for {operation}")]
    MissingOperand {
        operand: &'static str,
        operation: &'static str,
    },

    /// The request was not a valid calculation payload.
    #[error("{0}")]
    Malformed(String),

    /// The arithmetic engine rejected the operands.
    #[error(transparent)]
    Domain(#[from] ArithmeticError),
}

impl DispatchError {
    /// Create a new "malformed request" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
