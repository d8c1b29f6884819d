//! # Exact rationals
//!
//! Fractions of fixed width integers without rounding error, in two representations that share
//! one set of operations:
//!
//! ```
//! use exact_rational::{Rational, RationalNumber, SimplifiedRational};
//!
//! let sum = Rational::new(-3, 4)?.add(&Rational::new(1, 4)?)?;
//! assert_eq!(sum.to_string(), "-8/16");
//!
//! let sum = SimplifiedRational::new(-3, 4)?.add(&SimplifiedRational::new(1, 4)?)?;
//! assert_eq!(sum.to_string(), "-1/2");
//! # Ok::<(), exact_rational::RationalError>(())
//! ```
pub mod data;
pub mod error;

pub use data::number_types::integer::{gcd, simplify};
pub use data::number_types::rational::{
    Rational, Rational16, Rational32, Rational64, Rational8, RationalNumber, SimplifiedRational,
    SimplifiedRational16, SimplifiedRational32, SimplifiedRational64, SimplifiedRational8,
};
pub use data::number_types::traits::Integer;
pub use error::{RationalError, Result};
