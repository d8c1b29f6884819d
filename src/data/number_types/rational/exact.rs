//! # Unsimplified rationals
use std::fmt;

use log::debug;

use crate::data::number_types::rational::{render, RationalNumber, SimplifiedRational};
use crate::data::number_types::traits::Integer;
use crate::error::{RationalError, Result};

/// A fraction stored exactly as it was written.
///
/// No reduction ever happens: `2/4` stays `2/4` and `1/-3` keeps its negative denominator.
/// Equality is structural, so `Rational::new(2, 4) != Rational::new(1, 2)`; use
/// [`RationalNumber::value_eq`] to compare values.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug)]
pub struct Rational<I> {
    numerator: I,
    denominator: I,
}

impl<I: Integer> Rational<I> {
    /// # Errors
    ///
    /// `InvalidDenominator` if the denominator is zero.
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        if denominator.is_zero() {
            debug!("rejecting rational {}/0", numerator);
            return Err(RationalError::InvalidDenominator);
        }

        Ok(Self { numerator, denominator })
    }

    /// The same value in lowest terms.
    pub fn simplified(&self) -> Result<SimplifiedRational<I>> {
        SimplifiedRational::new(self.numerator, self.denominator)
    }
}

impl<I: Integer> RationalNumber for Rational<I> {
    type Integer = I;

    fn numerator(&self) -> I {
        self.numerator
    }

    fn denominator(&self) -> I {
        self.denominator
    }

    fn construct(numerator: I, denominator: I) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl<I: Integer> From<SimplifiedRational<I>> for Rational<I> {
    fn from(value: SimplifiedRational<I>) -> Self {
        Self {
            numerator: value.numerator(),
            denominator: value.denominator(),
        }
    }
}

impl<I: Integer> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.numerator, self.denominator, f)
    }
}
