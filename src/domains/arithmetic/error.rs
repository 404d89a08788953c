//! Arithmetic domain error types.

use thiserror::Error;

/// Errors raised when an operation's mathematical precondition fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// The square root operand was negative.
    #[error("cannot calculate square root of negative number")]
    NegativeSquareRoot,

    /// The factorial operand was negative.
    #[error("factorial is only defined for non-negative integers")]
    NegativeFactorial,

    /// The factorial operand was above 20.
    #[error("factorial too large to calculate")]
    FactorialOverflow,

    /// The least common multiple does not fit in 64 bits.
    #[error("least common multiple overflows 64-bit range")]
    LcmOverflow,
}
