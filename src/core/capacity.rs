use serde::Serialize;

use crate::{
    core::{Assumptions, Requirement},
    prelude::*,
    quantity::{KilowattHours, Watts},
};

/// Month length used to turn monthly consumption into a daily figure.
pub const DAYS_IN_MONTH: f64 = 30.0;

/// Generation and storage the system must provide.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Capacity {
    pub daily_consumption: KilowattHours,

    /// Minimum combined nameplate power of the panel array.
    pub array_power: Watts,

    /// Energy the battery bank must deliver over the autonomy window.
    pub usable_storage: KilowattHours,
}

/// Convert the requirement into the array power and usable storage to size for.
///
/// Depth of discharge is not applied here: battery capacities in the catalog are already usable.
#[instrument(skip_all, fields(monthly_consumption = %requirement.monthly_consumption))]
pub fn compute_capacity(requirement: &Requirement, assumptions: &Assumptions) -> Result<Capacity> {
    requirement.validate()?;
    assumptions.validate()?;

    let daily_consumption = requirement.monthly_consumption / DAYS_IN_MONTH;

    // Energy the array must harvest per day, spread over the peak sun hours:
    let effective_hours = assumptions.peak_sun_hours * assumptions.system_efficiency;
    let array_watts = (daily_consumption / effective_hours).0 * 1000.0;
    if array_watts > f64::from(u32::MAX) {
        return Err(Error::invalid_input(format!(
            "monthly consumption of {} is beyond residential scale",
            requirement.monthly_consumption,
        )));
    }
    let array_power = Watts::ceil(array_watts);

    let autonomy_days = u32::try_from(requirement.autonomy_days).map_err(|_| {
        Error::invalid_input(format!("invalid autonomy of {} days", requirement.autonomy_days))
    })?;
    let usable_storage = daily_consumption * autonomy_days;

    debug!(%daily_consumption, %array_power, %usable_storage, "computed the capacity");
    Ok(Capacity { daily_consumption, array_power, usable_storage })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::Hours;

    fn requirement(monthly_consumption: f64) -> Requirement {
        Requirement::builder().monthly_consumption(KilowattHours(monthly_consumption)).build()
    }

    #[test]
    fn test_reference_household() -> Result {
        let capacity = compute_capacity(&requirement(450.0), &Assumptions::default())?;
        assert_abs_diff_eq!(capacity.daily_consumption.0, 15.0);
        assert_eq!(capacity.array_power, Watts(3750));
        assert_abs_diff_eq!(capacity.usable_storage.0, 30.0);
        Ok(())
    }

    #[test]
    fn test_rounds_up_to_whole_watt() -> Result {
        // 100 / 30 / 4 * 1000 = 833.33… W
        let capacity = compute_capacity(&requirement(100.0), &Assumptions::default())?;
        assert_eq!(capacity.array_power, Watts(834));
        Ok(())
    }

    #[test]
    fn test_autonomy_scales_storage() -> Result {
        let requirement = Requirement::builder()
            .monthly_consumption(KilowattHours(300.0))
            .autonomy_days(3)
            .build();
        let capacity = compute_capacity(&requirement, &Assumptions::default())?;
        assert_abs_diff_eq!(capacity.usable_storage.0, 30.0);
        Ok(())
    }

    #[test]
    fn test_peak_sun_hours_affect_array_only() -> Result {
        let assumptions = Assumptions::builder().peak_sun_hours(Hours(6.0)).build();
        let capacity = compute_capacity(&requirement(800.0), &assumptions)?;
        // 800 / 30 / (6 × 0.8) × 1000 = 5555.55… W
        assert_eq!(capacity.array_power, Watts(5556));
        assert_abs_diff_eq!(capacity.usable_storage.0, 800.0 / 30.0 * 2.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_array_power_is_monotonic() -> Result {
        let assumptions = Assumptions::default();
        let mut previous = Watts::ZERO;
        for monthly_consumption in (1..=2000).map(f64::from) {
            let capacity = compute_capacity(&requirement(monthly_consumption), &assumptions)?;
            // Each extra kWh per month adds 8⅓ W, more than the one-watt quantization step:
            assert!(capacity.array_power > previous, "{monthly_consumption} kWh");
            previous = capacity.array_power;
        }
        Ok(())
    }

    #[test]
    fn test_zero_consumption_rejected() {
        let result = compute_capacity(&requirement(0.0), &Assumptions::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_negative_autonomy_rejected() {
        let requirement = Requirement::builder()
            .monthly_consumption(KilowattHours(450.0))
            .autonomy_days(-1)
            .build();
        let result = compute_capacity(&requirement, &Assumptions::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_absurd_consumption_rejected() {
        let result = compute_capacity(&requirement(1e12), &Assumptions::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
