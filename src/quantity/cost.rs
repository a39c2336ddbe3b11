use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Proportion;

/// Money, held as a whole number of [kobo][1], one-hundredth of a naira.
///
/// Integer storage keeps sums exact: a breakdown total always equals the sum of its parts.
///
/// [1]: https://en.wikipedia.org/wiki/Nigerian_naira
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Cost(pub i64);

derive_neg!(Cost);
derive_ordering!(Cost);

impl Cost {
    pub const ZERO: Self = Self(0);

    /// Highest accepted unit price of a catalog component, one trillion naira.
    ///
    /// Far above any real component, and low enough that [`Cost::from_naira`] never saturates.
    pub const MAX_UNIT_PRICE: Self = Self(1_000_000_000_000 * Self::KOBO_PER_NAIRA);

    const KOBO_PER_NAIRA: i64 = 100;

    /// Convert naira to the nearest kobo, rounding halves away from zero.
    ///
    /// Saturates at the `i64` bounds.
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_naira(naira: f64) -> Self {
        Self((naira * Self::KOBO_PER_NAIRA as f64).round() as i64)
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Price of `count` units, [`None`] on overflow.
    #[must_use]
    pub fn checked_mul(self, count: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(count)).map(Self)
    }

    /// Take a fraction of the cost, rounded to the nearest kobo.
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction(self, proportion: Proportion) -> Self {
        Self((self.0 as f64 * proportion.0).round() as i64)
    }

    /// Whole naira, truncated towards zero.
    #[must_use]
    pub const fn whole_naira(self) -> i64 {
        self.0 / Self::KOBO_PER_NAIRA
    }

    /// Kobo remainder, always non-negative.
    #[must_use]
    pub const fn kobo_remainder(self) -> u64 {
        (self.0 % Self::KOBO_PER_NAIRA).unsigned_abs()
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{:02} ₦", self.whole_naira().unsigned_abs(), self.kobo_remainder())
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{:02}₦", self.whole_naira().unsigned_abs(), self.kobo_remainder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_naira_rounds_to_kobo() {
        assert_eq!(Cost::from_naira(5030.82), Cost(503_082));
        assert_eq!(Cost::from_naira(0.005), Cost(1));
        assert_eq!(Cost::from_naira(-0.005), Cost(-1));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(Cost::from_naira(5030.82).checked_mul(10), Some(Cost(5_030_820)));
        assert_eq!(Cost::from_naira(5030.82).checked_mul(25), Some(Cost(12_577_050)));
        assert_eq!(Cost::MAX_UNIT_PRICE.checked_mul(u32::MAX), None);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Cost(1).checked_add(Cost(2)), Some(Cost(3)));
        assert_eq!(Cost(i64::MAX).checked_add(Cost(1)), None);
    }

    #[test]
    fn test_from_naira_saturates() {
        assert_eq!(Cost::from_naira(1e17), Cost(i64::MAX));
        assert_eq!(Cost::from_naira(1e12), Cost::MAX_UNIT_PRICE);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(Cost(1_000_000).fraction(Proportion(0.15)), Cost(150_000));
        assert_eq!(Cost(3).fraction(Proportion(0.5)), Cost(2));
        assert_eq!(Cost(1_000).fraction(Proportion::ZERO), Cost::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost(5_030_820).to_string(), "50308.20 ₦");
        assert_eq!(Cost(-50).to_string(), "-0.50 ₦");
        assert_eq!(format!("{:?}", Cost(7)), "0.07₦");
    }
}
