use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{Hours, Proportion},
};

/// Fixed design assumptions shared by every recommendation.
#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assumptions {
    /// Average daily hours of 1 kW/m² equivalent irradiance.
    #[builder(default = Hours(5.0))]
    pub peak_sun_hours: Hours,

    /// Combined inverter, wiring, and charge losses, as the fraction of energy that survives them.
    #[builder(default = Proportion(0.8))]
    pub system_efficiency: Proportion,

    /// Fraction of nameplate battery capacity that is usable.
    ///
    /// Only applied when a catalog states nameplate capacities, the engine itself works with usable
    /// capacity.
    #[builder(default = Proportion(0.8))]
    pub battery_depth_of_discharge: Proportion,

    /// Installation and balance-of-system costs as a fraction of the equipment total.
    #[builder(default = Proportion(0.15))]
    pub installation_rate: Proportion,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Assumptions {
    pub fn validate(&self) -> Result {
        if !(self.peak_sun_hours.0.is_finite() && self.peak_sun_hours > Hours::ZERO) {
            return Err(Error::invalid_input(format!(
                "peak sun hours must be positive, got {}",
                self.peak_sun_hours,
            )));
        }
        if !(self.system_efficiency.is_unit_interval() && self.system_efficiency > Proportion::ZERO)
        {
            return Err(Error::invalid_input(format!(
                "system efficiency must be within (0%, 100%], got {}",
                self.system_efficiency,
            )));
        }
        if !(self.battery_depth_of_discharge.is_unit_interval()
            && self.battery_depth_of_discharge > Proportion::ZERO)
        {
            return Err(Error::invalid_input(format!(
                "battery depth of discharge must be within (0%, 100%], got {}",
                self.battery_depth_of_discharge,
            )));
        }
        if !(self.installation_rate.0.is_finite() && self.installation_rate >= Proportion::ZERO) {
            return Err(Error::invalid_input(format!(
                "installation rate must be non-negative, got {}",
                self.installation_rate,
            )));
        }
        Ok(())
    }
}
