//! A set of utilities for working with decimal amounts.

/// Create an exact decimal number.
///
/// This is a thin wrapper around `rust_decimal_macros::dec!` so amounts and
/// scalars can be written as literals without going through binary floating
/// point, ie `num!(0.1) + num!(0.2) == num!(0.3)`. The expansion names both
/// `rust_decimal_macros` and `rust_decimal`, so callers outside this crate need
/// both as dependencies to use it.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
