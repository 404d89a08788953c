//! Arithmetic domain module.
//!
//! The arithmetic engine is a set of stateless, side-effect free functions.
//! Every operation with a domain restriction returns an [`ArithmeticError`]
//! rather than producing a silent NaN or wrapped integer.

pub mod engine;
mod error;

pub use engine::{
    ArithmeticResult, MAX_FACTORIAL_INPUT, add, divide, factorial, gcd, lcm, multiply, power,
    sqrt, subtract,
};
pub use error::ArithmeticError;
