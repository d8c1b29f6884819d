use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::{PrimInt, Signed};

/// Fixed width signed integer used to store numerators and denominators.
pub trait Integer: PrimInt + Signed + Hash + Debug + Display + Send + Sync + 'static {
    /// Integer of twice the width.
    ///
    /// The product of any two values of `Self` is representable in this type.
    type Wide: PrimInt + Signed + Debug + Display;

    fn widen(self) -> Self::Wide;

    /// Absolute value, `None` for the minimum value.
    fn checked_abs(self) -> Option<Self> {
        if self < Self::zero() {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    /// Negation, `None` for the minimum value.
    fn checked_neg(self) -> Option<Self> {
        Self::zero().checked_sub(&self)
    }
}
