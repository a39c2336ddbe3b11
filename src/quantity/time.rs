use std::ops::Mul;

use crate::quantity::Proportion;

quantity!(Hours, via: f64, suffix: "h", precision: 1);

impl Mul<Proportion> for Hours {
    type Output = Self;

    fn mul(self, proportion: Proportion) -> Self::Output {
        Self(self.0 * proportion.0)
    }
}
