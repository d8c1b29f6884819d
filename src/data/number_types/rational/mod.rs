//! # Rational numbers
//!
//! Exact computation with fractions of fixed size integers. Two representations share all of
//! their arithmetic through the [`RationalNumber`] trait:
//!
//! * [`Rational`] keeps numerator and denominator exactly as they were given.
//! * [`SimplifiedRational`] keeps them in lowest terms, with a positive denominator.
//!
//! Arithmetic on a value produces a value of the same representation.
use std::cmp::Ordering;
use std::fmt;

use log::debug;
use num::{CheckedAdd, CheckedSub, One, Signed, ToPrimitive, Zero};

use crate::data::number_types::integer::checked;
use crate::data::number_types::traits::Integer;
use crate::error::{RationalError, Result};

pub use exact::Rational;
pub use simplified::SimplifiedRational;

pub type Rational8 = Rational<i8>;
pub type Rational16 = Rational<i16>;
pub type Rational32 = Rational<i32>;
pub type Rational64 = Rational<i64>;
pub type SimplifiedRational8 = SimplifiedRational<i8>;
pub type SimplifiedRational16 = SimplifiedRational<i16>;
pub type SimplifiedRational32 = SimplifiedRational<i32>;
pub type SimplifiedRational64 = SimplifiedRational<i64>;

mod exact;
mod macros;
mod simplified;

/// Operations shared by all rational representations.
///
/// Implementors supply the numerator, the denominator and a way to `construct` a new value of
/// their own type; everything else is derived from those. Each representation applies its own
/// normalization inside `construct`, so results stay in the representation of the operands.
///
/// All arithmetic is checked: a result that doesn't fit the storage integer is an
/// `RationalError::Overflow`, never a wrapped value.
pub trait RationalNumber: Sized + Copy {
    type Integer: Integer;

    fn numerator(&self) -> Self::Integer;
    fn denominator(&self) -> Self::Integer;

    /// Create a new value of this representation.
    ///
    /// # Errors
    ///
    /// `InvalidDenominator` if the denominator is zero.
    fn construct(numerator: Self::Integer, denominator: Self::Integer) -> Result<Self>;

    fn from_integer(value: Self::Integer) -> Result<Self> {
        Self::construct(value, Self::Integer::one())
    }

    fn zero() -> Result<Self> {
        Self::construct(Self::Integer::zero(), Self::Integer::one())
    }

    fn one() -> Result<Self> {
        Self::construct(Self::Integer::one(), Self::Integer::one())
    }

    fn negate(&self) -> Result<Self> {
        Self::construct(checked(self.numerator().checked_neg())?, self.denominator())
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if this value is zero.
    fn invert(&self) -> Result<Self> {
        if self.numerator().is_zero() {
            debug!("can't invert a rational with a zero numerator");
            return Err(RationalError::DivisionByZero);
        }

        Self::construct(self.denominator(), self.numerator())
    }

    fn add(&self, other: &Self) -> Result<Self> {
        let numerator = checked(
            cross(self.numerator(), other.denominator())?
                .checked_add(&cross(other.numerator(), self.denominator())?),
        )?;

        Self::construct(numerator, cross(self.denominator(), other.denominator())?)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        let numerator = checked(
            cross(self.numerator(), other.denominator())?
                .checked_sub(&cross(other.numerator(), self.denominator())?),
        )?;

        Self::construct(numerator, cross(self.denominator(), other.denominator())?)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Self::construct(
            cross(self.numerator(), other.numerator())?,
            cross(self.denominator(), other.denominator())?,
        )
    }

    /// # Errors
    ///
    /// `DivisionByZero` if `other` is zero.
    fn divide(&self, other: &Self) -> Result<Self> {
        if other.numerator().is_zero() {
            debug!("can't divide by a rational with a zero numerator");
            return Err(RationalError::DivisionByZero);
        }

        self.multiply(&other.invert()?)
    }

    /// Integer power, negative exponents invert first.
    fn pow(&self, exponent: i32) -> Result<Self> {
        let mut base = if exponent < 0 { self.invert()? } else { *self };
        let mut remaining = exponent.unsigned_abs();
        let mut result = Self::one()?;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.multiply(&base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.multiply(&base)?;
            }
        }

        Ok(result)
    }

    fn abs(&self) -> Result<Self> {
        Self::construct(
            checked(self.numerator().checked_abs())?,
            checked(self.denominator().checked_abs())?,
        )
    }

    /// Order by value, regardless of the sign of either denominator.
    ///
    /// Cross products are taken in the wide integer and can't overflow.
    fn compare_to(&self, other: &Self) -> Ordering {
        let left = self.numerator().widen() * other.denominator().widen();
        let right = other.numerator().widen() * self.denominator().widen();

        // Multiplying both sides by a negative denominator product flips the inequality
        if self.denominator().is_negative() != other.denominator().is_negative() {
            left.cmp(&right).reverse()
        } else {
            left.cmp(&right)
        }
    }

    /// Whether both represent the same number, even if written differently.
    fn value_eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }

    fn signum(&self) -> Self::Integer {
        self.numerator().signum() * self.denominator().signum()
    }

    fn is_negative(&self) -> bool {
        self.signum() < Self::Integer::zero()
    }

    fn is_positive(&self) -> bool {
        self.signum() > Self::Integer::zero()
    }

    /// Closest `f64`, not exact in general.
    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator().to_f64()? / self.denominator().to_f64()?)
    }
}

fn cross<I: Integer>(left: I, right: I) -> Result<I> {
    checked(left.checked_mul(&right))
}

/// Render as `n/d` or `-n/d` with absolute values for `n` and `d`.
///
/// Absolute values are taken in the wide integer, so the minimum value renders without overflow.
fn render<I: Integer>(numerator: I, denominator: I, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (numerator, denominator) = (numerator.widen(), denominator.widen());

    if !numerator.is_zero() && numerator.is_negative() != denominator.is_negative() {
        f.write_str("-")?;
    }

    write!(f, "{}/{}", numerator.abs(), denominator.abs())
}
