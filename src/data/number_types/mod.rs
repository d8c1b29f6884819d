//! # Number types
//!
//! Storage integers and the rational numbers built from them.
pub mod integer;
pub mod rational;
pub mod traits;
