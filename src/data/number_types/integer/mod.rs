//! # Fixed size integers
//!
//! Storage integers for the rational types, and the arithmetic on them that both rational
//! variants rely on.
use log::debug;

use crate::data::number_types::traits::Integer;
use crate::error::{RationalError, Result};

pub use gcd::{gcd, simplify};

mod gcd;

macro_rules! impl_integer {
    ($t:ident, $wide:ident) => {
        impl Integer for $t {
            type Wide = $wide;

            fn widen(self) -> Self::Wide {
                self.into()
            }
        }
    }
}

impl_integer!(i8, i16);
impl_integer!(i16, i32);
impl_integer!(i32, i64);
impl_integer!(i64, i128);

/// Turn the result of a checked integer operation into a `Result`.
pub(crate) fn checked<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        debug!("rational arithmetic overflowed the storage integer");
        RationalError::Overflow
    })
}

/// Bring a wide value back to the storage width.
pub(crate) fn narrow<I: Integer>(value: I::Wide) -> Result<I> {
    checked(<I as num::NumCast>::from(value))
}
