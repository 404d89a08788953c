//! Request, result and error records for calculations.
//!
//! These are plain data types with serde derives. Status codes and other
//! transport concerns live in `core::transport`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DispatchError;

/// Category label carried by every calculation error.
pub const BAD_REQUEST: &str = "Bad Request";

/// The fixed set of operations accepted by the calculate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
}

impl Operation {
    /// All operations in canonical listing order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
    ];

    /// Wire name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Whether the operation consumes the second operand.
    pub fn is_binary(self) -> bool {
        !matches!(self, Operation::Sqrt)
    }

    /// Names of every operation, in listing order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.as_str()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(DispatchError::InvalidOperation)
    }
}

/// Inbound calculation request.
///
/// `operation` stays a raw string here so that unknown names reach the
/// dispatcher and produce "Invalid operation" rather than a serde error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationRequest {
    /// First operand (always required).
    pub a: f64,

    /// Second operand, required for binary operations and ignored by `sqrt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,

    /// One of: add, subtract, multiply, divide, power, sqrt.
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(a: f64, b: Option<f64>, operation: impl Into<String>) -> Self {
        Self {
            a,
            b,
            operation: operation.into(),
        }
    }
}

/// Successful calculation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub result: f64,
    pub operation: Operation,
    pub a: f64,
    /// Present only for binary operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

/// Error envelope returned for any failed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationError {
    pub error: String,
    pub message: String,
}

impl OperationError {
    /// Create a "Bad Request" error with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: BAD_REQUEST.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for OperationError {}

impl From<DispatchError> for OperationError {
    fn from(err: DispatchError) -> Self {
        Self::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_parse() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("sqrt".parse::<Operation>().unwrap(), Operation::Sqrt);
        assert!("modulo".parse::<Operation>().is_err());
        assert!("ADD".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_names_in_order() {
        assert_eq!(
            Operation::names(),
            vec!["add", "subtract", "multiply", "divide", "power", "sqrt"]
        );
    }

    #[test]
    fn test_only_sqrt_is_unary() {
        let unary: Vec<_> = Operation::ALL.iter().filter(|op| !op.is_binary()).collect();
        assert_eq!(unary, vec![&Operation::Sqrt]);
    }

    #[test]
    fn test_operation_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Operation::Multiply).unwrap(), json!("multiply"));
        for op in Operation::ALL {
            assert_eq!(serde_json::to_value(op).unwrap(), json!(op.to_string()));
        }
    }

    #[test]
    fn test_request_without_b() {
        let req: CalculationRequest =
            serde_json::from_value(json!({ "a": 16, "operation": "sqrt" })).unwrap();
        assert_eq!(req, CalculationRequest::new(16.0, None, "sqrt"));
    }

    #[test]
    fn test_request_missing_fields_rejected() {
        assert!(serde_json::from_value::<CalculationRequest>(json!({ "operation": "add" })).is_err());
        assert!(serde_json::from_value::<CalculationRequest>(json!({ "a": 1, "b": 2 })).is_err());
        assert!(
            serde_json::from_value::<CalculationRequest>(json!({ "a": "1", "operation": "add" }))
                .is_err()
        );
    }

    #[test]
    fn test_result_omits_b_when_absent() {
        let result = CalculationResult {
            result: 4.0,
            operation: Operation::Sqrt,
            a: 16.0,
            b: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "result": 4.0, "operation": "sqrt", "a": 16.0 }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let err = OperationError::bad_request("Invalid operation");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "error": "Bad Request", "message": "Invalid operation" })
        );
        assert_eq!(err.to_string(), "Bad Request: Invalid operation");
    }
}
