//! Calculation dispatcher.
//!
//! Validates a [`CalculationRequest`], routes it to the arithmetic engine
//! and shapes the outcome into a [`CalculationResult`] or a Bad Request
//! [`OperationError`]. Every failure path ends in an error value; nothing
//! in here panics.

use tracing::{info, instrument, warn};

use super::error::DispatchError;
use super::model::{CalculationRequest, CalculationResult, Operation, OperationError};
use crate::domains::arithmetic as engine;

/// Evaluate a parsed operation against its operands.
///
/// `b` must be present for binary operations; unary operations ignore it.
pub fn evaluate(operation: Operation, a: f64, b: Option<f64>) -> Result<f64, DispatchError> {
    let operand_b = || {
        b.ok_or(DispatchError::MissingOperand {
            operand: "b",
            operation: operation.as_str(),
        })
    };

    let value = match operation {
        Operation::Add => engine::add(a, operand_b()?),
        Operation::Subtract => engine::subtract(a, operand_b()?),
        Operation::Multiply => engine::multiply(a, operand_b()?),
        Operation::Divide => engine::divide(a, operand_b()?)?,
        Operation::Power => engine::power(a, operand_b()?),
        Operation::Sqrt => engine::sqrt(a)?,
    };
    Ok(value)
}

/// Dispatch a typed request.
#[instrument(skip_all, fields(operation = %request.operation))]
pub fn dispatch(request: &CalculationRequest) -> Result<CalculationResult, DispatchError> {
    let operation: Operation = request.operation.parse().inspect_err(|_| {
        warn!("Rejected unknown operation: {}", request.operation);
    })?;

    let result = evaluate(operation, request.a, request.b).inspect_err(|e| {
        warn!("Calculation failed: {}", e);
    })?;

    let b = if operation.is_binary() { request.b } else { None };

    match b {
        Some(b) => info!("Calculation: {} {} {} = {}", request.a, operation, b, result),
        None => info!("Calculation: {} {} = {}", operation, request.a, result),
    }

    Ok(CalculationResult {
        result,
        operation,
        a: request.a,
        b,
    })
}

/// Dispatch an untyped JSON payload.
///
/// Shape problems (missing `a` or `operation`, wrong types) are reported
/// with the deserializer's message; everything else goes through
/// [`dispatch`].
pub fn dispatch_value(payload: serde_json::Value) -> Result<CalculationResult, OperationError> {
    let request: CalculationRequest = serde_json::from_value(payload)
        .map_err(|e| DispatchError::malformed(e.to_string()))?;
    Ok(dispatch(&request)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::arithmetic::ArithmeticError;
    use serde_json::json;

    fn request(a: f64, b: Option<f64>, op: &str) -> CalculationRequest {
        CalculationRequest::new(a, b, op)
    }

    #[test]
    fn test_dispatch_add() {
        let result = dispatch(&request(10.0, Some(5.0), "add")).unwrap();
        assert_eq!(
            result,
            CalculationResult {
                result: 15.0,
                operation: Operation::Add,
                a: 10.0,
                b: Some(5.0),
            }
        );
    }

    #[test]
    fn test_dispatch_every_binary_operation() {
        let cases = [
            ("add", 15.0),
            ("subtract", 5.0),
            ("multiply", 50.0),
            ("divide", 2.0),
            ("power", 100_000.0),
        ];
        for (op, expected) in cases {
            let result = dispatch(&request(10.0, Some(5.0), op)).unwrap();
            assert_eq!(result.result, expected, "operation {op}");
            assert_eq!(result.b, Some(5.0));
            assert_eq!(result.operation.as_str(), op);
        }
    }

    #[test]
    fn test_dispatch_divide_by_zero() {
        let err = dispatch(&request(10.0, Some(0.0), "divide")).unwrap_err();
        assert_eq!(err, DispatchError::Domain(ArithmeticError::DivisionByZero));

        let envelope = OperationError::from(err);
        assert_eq!(envelope.error, "Bad Request");
        assert!(envelope.message.contains("division by zero"));
    }

    #[test]
    fn test_dispatch_sqrt_has_no_b() {
        let result = dispatch(&request(16.0, None, "sqrt")).unwrap();
        assert_eq!(result.result, 4.0);
        assert_eq!(result.b, None);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "result": 4.0, "operation": "sqrt", "a": 16.0 }));
    }

    #[test]
    fn test_dispatch_sqrt_ignores_supplied_b() {
        let result = dispatch(&request(9.0, Some(100.0), "sqrt")).unwrap();
        assert_eq!(result.result, 3.0);
        assert_eq!(result.b, None);
    }

    #[test]
    fn test_dispatch_negative_sqrt() {
        let err = OperationError::from(dispatch(&request(-4.0, None, "sqrt")).unwrap_err());
        assert_eq!(err.message, "cannot calculate square root of negative number");
    }

    #[test]
    fn test_dispatch_unknown_operation() {
        let err = dispatch(&request(1.0, Some(2.0), "modulo")).unwrap_err();
        assert_eq!(err, DispatchError::InvalidOperation);
        assert_eq!(
            OperationError::from(err),
            OperationError::bad_request("Invalid operation")
        );
    }

    #[test]
    fn test_dispatch_binary_requires_b() {
        let err = dispatch(&request(1.0, None, "multiply")).unwrap_err();
        assert_eq!(err.to_string(), "operand 'b' is required for multiply");
    }

    #[test]
    fn test_dispatch_non_finite_result() {
        let result = dispatch(&request(-8.0, Some(0.5), "power")).unwrap();
        assert!(result.result.is_nan());
        assert_eq!(result.b, Some(0.5));

        let result = dispatch(&request(10.0, Some(400.0), "power")).unwrap();
        assert!(result.result.is_infinite());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["result"], serde_json::Value::Null);
    }

    #[test]
    fn test_dispatch_value_round_trip() {
        let result = dispatch_value(json!({ "a": 10, "b": 5, "operation": "add" })).unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "result": 15.0, "operation": "add", "a": 10.0, "b": 5.0 })
        );
    }

    #[test]
    fn test_dispatch_value_missing_fields() {
        let err = dispatch_value(json!({ "b": 5, "operation": "add" })).unwrap_err();
        assert_eq!(err.error, "Bad Request");
        assert!(err.message.contains("missing field `a`"));

        let err = dispatch_value(json!({ "a": 5 })).unwrap_err();
        assert!(err.message.contains("missing field `operation`"));
    }

    #[test]
    fn test_dispatch_value_wrong_types() {
        let err = dispatch_value(json!({ "a": 1, "operation": 7 })).unwrap_err();
        assert_eq!(err.error, "Bad Request");

        let err = dispatch_value(json!("not an object")).unwrap_err();
        assert_eq!(err.error, "Bad Request");
    }
}
