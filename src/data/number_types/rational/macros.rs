//! # Shorthands
//!
//! Mostly for tests and examples, these panic when given a zero denominator.

/// Shorthand for creating an unsimplified [`Rational`](crate::Rational).
///
/// `R!(3)` is `3/1`, `R!(3, 4)` is `3/4`.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::R!($value, 1)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::data::number_types::rational::Rational::new($numerator, $denominator)
            .expect("a rational shorthand needs a nonzero denominator")
    };
}

/// Shorthand for creating a [`SimplifiedRational`](crate::SimplifiedRational).
///
/// `RS!(2, 4)` is `1/2`.
#[macro_export]
macro_rules! RS {
    ($value:expr) => {
        $crate::RS!($value, 1)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::data::number_types::rational::SimplifiedRational::new($numerator, $denominator)
            .expect("a rational shorthand needs a nonzero denominator")
    };
}
