//! Pure arithmetic operations.
//!
//! Floating point operations follow IEEE-754 double semantics. Integer
//! operations (factorial, gcd, lcm) work on 64-bit values and report range
//! problems as [`ArithmeticError`] instead of wrapping.

use super::error::ArithmeticError;

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Result type for engine operations that can fail.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`. Fails when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `base` to `exponent`. NaN and infinities propagate.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root of `n`. Fails for negative input; `-0.0` is accepted.
pub fn sqrt(n: f64) -> ArithmeticResult<f64> {
    if n < 0.0 {
        return Err(ArithmeticError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}

/// Factorial of `n` for `0 <= n <= 20`.
pub fn factorial(n: i64) -> ArithmeticResult<i64> {
    if n < 0 {
        return Err(ArithmeticError::NegativeFactorial);
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(ArithmeticError::FactorialOverflow);
    }
    Ok((2..=n).product())
}

/// Greatest common divisor by iterative Euclidean reduction on absolute values.
///
/// `gcd(0, b) == |b|` and `gcd(0, 0) == 0`. Returned as `u64` so that
/// `i64::MIN` inputs stay representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `|a·b| / gcd(a, b)`. Zero when either operand is zero.
pub fn lcm(a: i64, b: i64) -> ArithmeticResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    // divide first so the intermediate product stays as small as possible
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or(ArithmeticError::LcmOverflow)
}
