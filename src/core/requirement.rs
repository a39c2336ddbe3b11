use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{Cost, KilowattHours},
};

pub const DEFAULT_AUTONOMY_DAYS: i32 = 2;

/// What the household asks for.
#[must_use]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Average monthly electricity consumption.
    pub monthly_consumption: KilowattHours,

    /// Upper bound for the total cost, [`None`] skips the budget check.
    pub budget: Option<Cost>,

    /// Days the battery bank must carry the household without any solar input.
    ///
    /// Signed so that a nonsensical input reaches validation instead of wrapping around.
    #[builder(default = DEFAULT_AUTONOMY_DAYS)]
    pub autonomy_days: i32,
}

impl Requirement {
    pub fn validate(&self) -> Result {
        if !(self.monthly_consumption.0.is_finite()
            && self.monthly_consumption > KilowattHours::ZERO)
        {
            return Err(Error::invalid_input(format!(
                "monthly consumption must be positive, got {}",
                self.monthly_consumption,
            )));
        }
        if self.autonomy_days <= 0 {
            return Err(Error::invalid_input(format!(
                "autonomy must be at least one day, got {}",
                self.autonomy_days,
            )));
        }
        if let Some(budget) = self.budget
            && budget < Cost::ZERO
        {
            return Err(Error::invalid_input(format!("budget must not be negative, got {budget}")));
        }
        Ok(())
    }
}
