use std::fmt::{Debug, Display, Formatter};

/// Dimensionless fraction, normally within `0.0..=1.0`.
#[repr(transparent)]
#[derive(Clone, Copy, derive_more::FromStr, serde::Deserialize, serde::Serialize)]
pub struct Proportion(pub f64);

ordered_float!(Proportion);

impl Proportion {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    #[must_use]
    pub fn is_unit_interval(self) -> bool {
        self.0.is_finite() && (0.0..=1.0).contains(&self.0)
    }
}

impl Display for Proportion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl Debug for Proportion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unit_interval() {
        assert!(Proportion(0.0).is_unit_interval());
        assert!(Proportion(0.8).is_unit_interval());
        assert!(Proportion::ONE.is_unit_interval());
        assert!(!Proportion(1.01).is_unit_interval());
        assert!(!Proportion(-0.1).is_unit_interval());
        assert!(!Proportion(f64::NAN).is_unit_interval());
    }

    #[test]
    fn test_display() {
        assert_eq!(Proportion(0.15).to_string(), "15.0%");
    }
}
