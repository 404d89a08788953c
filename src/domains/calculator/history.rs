//! Demonstration history fixture.
//!
//! Nothing is recorded between requests; the history endpoint always
//! returns this fixed sample.

use super::model::{CalculationResult, Operation};

/// Two sample calculations returned by the history endpoint.
pub fn sample_history() -> Vec<CalculationResult> {
    vec![
        CalculationResult {
            result: 15.0,
            operation: Operation::Add,
            a: 10.0,
            b: Some(5.0),
        },
        CalculationResult {
            result: 50.0,
            operation: Operation::Multiply,
            a: 10.0,
            b: Some(5.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::calculator::dispatch;
    use crate::domains::calculator::CalculationRequest;

    #[test]
    fn test_sample_history_is_consistent_with_dispatcher() {
        for entry in sample_history() {
            let request = CalculationRequest::new(entry.a, entry.b, entry.operation.as_str());
            assert_eq!(dispatch(&request).unwrap(), entry);
        }
    }
}
