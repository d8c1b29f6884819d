//! # Errors
//!
//! Every fallible operation in this crate fails with a [`RationalError`]. Failures are
//! immediate: no operation produces a partial value.
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Error)]
pub enum RationalError {
    /// A value was constructed with a zero denominator.
    #[error("the denominator of a rational number can't be zero")]
    InvalidDenominator,
    /// The preconditions of the greatest common divisor were violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Inverting or dividing would place a zero in the denominator.
    #[error("division by zero")]
    DivisionByZero,
    /// An intermediate or final value doesn't fit in the storage integer.
    #[error("integer overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, RationalError>;
