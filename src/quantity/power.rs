use std::ops::Mul;

use crate::quantity::{INTEGER_TOLERANCE, ceil_tolerant};

quantity!(
    /// Whole watts, the resolution of panel nameplates and array sizing.
    Watts, via: u64, suffix: "W", precision: 0
);

quantity!(Kilowatts, via: f64, suffix: "kW", precision: 1);

impl Watts {
    /// Smallest whole wattage not below the given fractional watts.
    ///
    /// A relative tolerance of one part per billion absorbs floating-point noise,
    /// so that `3750.000000001` still quantizes to `3750 W`.
    #[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn ceil(watts: f64) -> Self {
        Self(ceil_tolerant(watts).max(0.0) as u64)
    }
}

impl Kilowatts {
    /// Whether the rating is at least `power`.
    ///
    /// Only a shortfall within [`INTEGER_TOLERANCE`] of `power` is forgiven: `3.6 kW` covers
    /// `3600 W`, while `3.5996 kW` does not.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn covers(self, power: Watts) -> bool {
        let watts = power.0 as f64;
        self.0 * 1000.0 >= watts - watts.max(1.0) * INTEGER_TOLERANCE
    }
}

impl Mul<u32> for Watts {
    type Output = Self;

    fn mul(self, count: u32) -> Self::Output {
        Self(self.0 * u64::from(count))
    }
}
