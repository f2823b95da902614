//! Unit-tagged decimal quantities.
//!
//! A [`Quantity`] pairs an exact decimal amount with a unit of measure and
//! keeps the two together through arithmetic and comparison. Quantities of
//! different units are never silently combined: adding, subtracting, dividing
//! or ordering across units is an error, while equality across units is simply
//! `false`.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use units::{Quantity, Unit};
//!
//! let harvest = Quantity::new(dec!(6), Unit::Bushels);
//! let sold = Quantity::new(dec!(3), Unit::Bushels);
//! assert_eq!((harvest - sold).to_string(), "3 Bushels");
//! assert_eq!(harvest / sold, dec!(2));
//! assert!(harvest.try_add(&Quantity::new(dec!(1), Unit::Barrels)).is_err());
//! ```

#[macro_use]
mod util;
pub mod error;
pub mod quantity;
pub mod unit;

pub use quantity::Quantity;
pub use unit::Unit;
