//! # Rationals in lowest terms
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use log::debug;

use crate::data::number_types::integer::{checked, simplify};
use crate::data::number_types::rational::{render, Rational, RationalNumber};
use crate::data::number_types::traits::Integer;
use crate::error::{RationalError, Result};

/// A fraction that is always in canonical form.
///
/// Numerator and denominator share no factor and the denominator is positive, so the sign is
/// carried by the numerator. Zero is `0/1`. Because the form is unique, structural equality is
/// value equality, and the type is totally ordered.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug)]
pub struct SimplifiedRational<I> {
    numerator: I,
    denominator: I,
}

impl<I: Integer> SimplifiedRational<I> {
    /// Reduce `numerator / denominator` to lowest terms.
    ///
    /// # Errors
    ///
    /// `InvalidDenominator` if the denominator is zero, `Overflow` if moving the sign to the
    /// numerator doesn't fit (e.g. `1 / i32::MIN`).
    pub fn new(numerator: I, denominator: I) -> Result<Self> {
        if denominator.is_zero() {
            debug!("rejecting rational {}/0", numerator);
            return Err(RationalError::InvalidDenominator);
        }

        let (numerator, denominator) = simplify(numerator, denominator)?;
        let (numerator, denominator) = if denominator.is_negative() {
            (checked(numerator.checked_neg())?, checked(denominator.checked_neg())?)
        } else {
            (numerator, denominator)
        };
        debug_assert!(denominator.is_positive());

        Ok(Self { numerator, denominator })
    }
}

impl<I: Integer> RationalNumber for SimplifiedRational<I> {
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

impl<I: Integer> TryFrom<Rational<I>> for SimplifiedRational<I> {
    type Error = RationalError;

    fn try_from(value: Rational<I>) -> Result<Self> {
        value.simplified()
    }
}

impl<I: Integer> Ord for SimplifiedRational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl<I: Integer> PartialOrd for SimplifiedRational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Integer> fmt::Display for SimplifiedRational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.numerator, self.denominator, f)
    }
}
