//! The units a `Quantity` can be tagged with.
//!
//! Units are opaque tags: two units are either the same or they aren't. No
//! conversion between units is defined here or anywhere else in the crate.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Bushels,
    Barrels,
    Gallons,
    Liters,
    CubicMeters,
}

impl Unit {
    /// The stable display name for this unit.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Bushels => "Bushels",
            Unit::Barrels => "Barrels",
            Unit::Gallons => "Gallons",
            Unit::Liters => "Liters",
            Unit::CubicMeters => "CubicMeters",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
