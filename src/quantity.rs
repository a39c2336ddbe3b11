//! Strongly-typed physical and monetary quantities.

#[macro_use]
mod macros;

pub mod cost;
pub mod energy;
pub mod power;
pub mod proportion;
pub mod time;

pub use self::{
    cost::Cost,
    energy::KilowattHours,
    power::{Kilowatts, Watts},
    proportion::Proportion,
    time::Hours,
};

/// Relative tolerance under which a value is considered to sit exactly on an integer.
pub(crate) const INTEGER_TOLERANCE: f64 = 1e-9;

/// Round up to an integer, treating values within [`INTEGER_TOLERANCE`] of an integer as that integer.
pub(crate) fn ceil_tolerant(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() <= rounded.abs().max(1.0) * INTEGER_TOLERANCE {
        rounded
    } else {
        value.ceil()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_ceil_tolerant() {
        assert_abs_diff_eq!(ceil_tolerant(25.000_000_000_000_004), 25.0);
        assert_abs_diff_eq!(ceil_tolerant(24.999_999_999_999_996), 25.0);
        assert_abs_diff_eq!(ceil_tolerant(9.375), 10.0);
        assert_abs_diff_eq!(ceil_tolerant(10.0), 10.0);
    }
}
