//! # Greatest common divisor
use log::trace;
use num::{PrimInt, Signed};

use crate::data::number_types::integer::narrow;
use crate::data::number_types::traits::Integer;
use crate::error::{RationalError, Result};

/// Greatest common divisor of `a` and `b`, using Euclid's algorithm.
///
/// # Errors
///
/// `InvalidArgument` unless `a > 0` and `b >= 0`.
pub fn gcd<T: PrimInt>(mut a: T, mut b: T) -> Result<T> {
    if a <= T::zero() {
        return Err(RationalError::InvalidArgument("gcd requires a positive first argument"));
    }
    if b < T::zero() {
        return Err(RationalError::InvalidArgument("gcd requires a non-negative second argument"));
    }

    // gcd(a, b) == gcd(b, a mod b), and the remainder strictly decreases
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    Ok(a)
}

/// Divide numerator and denominator by their greatest common divisor.
///
/// A zero numerator reduces to `(0, 1)`. Signs are left where they are, so a negative
/// denominator stays negative.
///
/// The absolute values are taken in the wide integer, such that pairs containing the minimum
/// value still reduce.
///
/// # Errors
///
/// `InvalidDenominator` if the denominator is zero.
pub fn simplify<I: Integer>(numerator: I, denominator: I) -> Result<(I, I)> {
    if denominator.is_zero() {
        return Err(RationalError::InvalidDenominator);
    }
    if numerator.is_zero() {
        return Ok((I::zero(), I::one()));
    }

    let (numerator, denominator) = (numerator.widen(), denominator.widen());
    let divisor = gcd(numerator.abs(), denominator.abs())?;
    trace!("simplifying {}/{} by {}", numerator, denominator, divisor);

    Ok((narrow(numerator / divisor)?, narrow(denominator / divisor)?))
}
