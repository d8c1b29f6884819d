//! # Traits shared by the number types
pub use integer::Integer;

mod integer;
