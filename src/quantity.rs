//! Quantities are decimal amounts tagged with a unit of measure.
//!
//! A `Quantity` never changes once built: every operation hands back a new
//! value. Units are never reconciled or converted, so any operation that mixes
//! two quantities (addition, subtraction, taking a ratio, ordering) requires
//! both sides to carry the same unit. The operator forms treat a mismatch as a
//! programmer error and panic. The `try_*` forms return it as an `Error`
//! instead.
//!
//! Equality is the exception: quantities with different units simply compare
//! unequal.

use crate::{
    error::{Error, Result},
    unit::Unit,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Quantity<U = Unit> {
    /// The numeric amount of this quantity
    #[getset(get_copy = "pub")]
    amount: Decimal,
    /// The unit this quantity is measured in
    #[getset(get = "pub")]
    unit: U,
}

impl<U> Quantity<U> {
    /// Create a new quantity. Any amount (negative, zero, fractional) and any
    /// unit is accepted.
    pub fn new<T: Into<Decimal>>(amount: T, unit: U) -> Self {
        Self {
            amount: amount.into(),
            unit,
        }
    }

    /// A quantity of zero in the given unit.
    pub fn zero(unit: U) -> Self {
        Self::new(Decimal::zero(), unit)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// The absolute value of this quantity, keeping its unit.
    pub fn abs(self) -> Self {
        Self::new(self.amount.abs(), self.unit)
    }

    /// Multiply by a scalar, returning an error instead of panicking if the
    /// result overflows.
    pub fn checked_mul<T: Into<Decimal>>(self, scalar: T) -> Result<Self> {
        let amount = self
            .amount
            .checked_mul(scalar.into())
            .ok_or_else(|| Error::NumericOpFailed("multiplication overflowed".into()))?;
        Ok(Self::new(amount, self.unit))
    }

    /// Divide by a scalar, returning an error on a zero divisor or overflow.
    pub fn checked_div_scalar<T: Into<Decimal>>(self, scalar: T) -> Result<Self> {
        let amount = self
            .amount
            .checked_div(scalar.into())
            .ok_or_else(|| Error::NumericOpFailed("division by zero or overflow".into()))?;
        Ok(Self::new(amount, self.unit))
    }

    /// Take the remainder by a scalar, returning an error on a zero divisor.
    pub fn checked_rem<T: Into<Decimal>>(self, scalar: T) -> Result<Self> {
        let amount = self
            .amount
            .checked_rem(scalar.into())
            .ok_or_else(|| Error::NumericOpFailed("remainder by zero or overflow".into()))?;
        Ok(Self::new(amount, self.unit))
    }
}

impl<U: PartialEq> Quantity<U> {
    /// Whether this quantity and `other` carry the same unit.
    pub fn has_same_unit(&self, other: &Self) -> bool {
        self.unit == other.unit
    }
}

impl<U: PartialEq + fmt::Display> Quantity<U> {
    fn require_same_unit(&self, other: &Self) -> Result<()> {
        if self.has_same_unit(other) {
            return Ok(());
        }
        Err(Error::UnitsMismatched {
            left: self.unit.to_string(),
            right: other.unit.to_string(),
        })
    }

    /// Panics with the mismatch error. Backs the operator forms, where mixing
    /// units is a bug in the caller.
    fn assert_same_unit(&self, other: &Self) {
        if let Err(e) = self.require_same_unit(other) {
            panic!("{}", e);
        }
    }

    /// Add two quantities of the same unit.
    pub fn try_add(&self, other: &Self) -> Result<Self>
        where U: Clone,
    {
        self.require_same_unit(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| Error::NumericOpFailed("addition overflowed".into()))?;
        Ok(Self::new(amount, self.unit.clone()))
    }

    /// Subtract `other` from this quantity. Both must have the same unit.
    pub fn try_sub(&self, other: &Self) -> Result<Self>
        where U: Clone,
    {
        self.require_same_unit(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| Error::NumericOpFailed("subtraction overflowed".into()))?;
        Ok(Self::new(amount, self.unit.clone()))
    }

    /// Get the unitless ratio between two quantities of the same unit.
    pub fn try_div(&self, other: &Self) -> Result<Decimal> {
        self.require_same_unit(other)?;
        self.amount
            .checked_div(other.amount)
            .ok_or_else(|| Error::NumericOpFailed("division by zero or overflow".into()))
    }

    /// Compare the amounts of two quantities of the same unit.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.require_same_unit(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl<U: PartialEq + fmt::Display> Add for Quantity<U> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.assert_same_unit(&other);
        Self::new(self.amount + other.amount, self.unit)
    }
}

impl<U: PartialEq + fmt::Display> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.assert_same_unit(&other);
        Self::new(self.amount - other.amount, self.unit)
    }
}

impl<U> Mul<Decimal> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self::new(self.amount * rhs, self.unit)
    }
}

impl<U> Mul<Quantity<U>> for Decimal {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

/// Division by a zero scalar panics, same as `Decimal` itself.
impl<U> Div<Decimal> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self {
        Self::new(self.amount / rhs, self.unit)
    }
}

/// Dividing two quantities of the same unit gives a plain ratio.
impl<U: PartialEq + fmt::Display> Div for Quantity<U> {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Decimal {
        self.assert_same_unit(&rhs);
        self.amount / rhs.amount
    }
}

impl<U> Rem<Decimal> for Quantity<U> {
    type Output = Self;

    fn rem(self, rhs: Decimal) -> Self {
        Self::new(self.amount % rhs, self.unit)
    }
}

impl<U> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.unit)
    }
}

/// Ordering only exists between quantities of the same unit. Comparing
/// mismatched units panics rather than answering `false`.
impl<U: PartialEq + fmt::Display> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.try_cmp(other) {
            Ok(ord) => Some(ord),
            Err(e) => panic!("{}", e),
        }
    }
}

/// Narrow a quantity down to its bare amount, dropping the unit.
impl<U> From<Quantity<U>> for Decimal {
    fn from(quantity: Quantity<U>) -> Self {
        quantity.amount
    }
}

impl<U: fmt::Display> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
