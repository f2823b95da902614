//! A set of utility macros and functions used throughout the crate.

#[macro_use]
pub mod number;
