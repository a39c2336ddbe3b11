use std::ops::{Div, Mul};

use crate::quantity::{power::Kilowatts, time::Hours};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 1);

impl Mul<f64> for KilowattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<u32> for KilowattHours {
    type Output = Self;

    fn mul(self, count: u32) -> Self::Output {
        Self(self.0 * f64::from(count))
    }
}

impl Div<f64> for KilowattHours {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Div<Hours> for KilowattHours {
    type Output = Kilowatts;

    fn div(self, hours: Hours) -> Self::Output {
        Kilowatts(self.0 / hours.0)
    }
}

impl Div<Self> for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_div_hours() {
        assert_abs_diff_eq!((KilowattHours(15.0) / Hours(4.0)).0, 3.75);
    }

    #[test]
    fn test_ordering() {
        assert!(KilowattHours(1.2) > KilowattHours(1.0));
        assert_eq!(KilowattHours(2.4).max(KilowattHours(1.2)), KilowattHours(2.4));
    }
}
