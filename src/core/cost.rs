use serde::Serialize;

use crate::{
    core::SystemConfiguration,
    prelude::*,
    quantity::{Cost, Proportion},
};

/// Itemized cost of a configuration.
///
/// Every amount is an exact number of kobo. `equipment_total` is the exact sum of the three
/// categories, and `total` is the exact sum of `equipment_total` and `installation`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub panels: Cost,

    /// A configuration always has exactly one inverter.
    pub inverter: Cost,

    pub batteries: Cost,
    pub equipment_total: Cost,

    /// Labour and balance-of-system, rounded to the nearest kobo.
    pub installation: Cost,

    pub total: Cost,
}

impl CostBreakdown {
    /// Price the configuration, failing with [`Error::InvalidInput`] when an amount overflows.
    pub fn estimate(
        configuration: &SystemConfiguration,
        installation_rate: Proportion,
    ) -> Result<Self> {
        let overflow = || {
            Error::invalid_input(format!(
                "the cost of {} × `{}` and {} × `{}` is beyond residential scale",
                configuration.panel_count,
                configuration.panel.model,
                configuration.battery_count,
                configuration.battery.model,
            ))
        };
        let panels = configuration
            .panel
            .unit_price
            .checked_mul(configuration.panel_count)
            .ok_or_else(overflow)?;
        let inverter = configuration.inverter.unit_price;
        let batteries = configuration
            .battery
            .unit_price
            .checked_mul(configuration.battery_count)
            .ok_or_else(overflow)?;
        let equipment_total = panels
            .checked_add(inverter)
            .and_then(|subtotal| subtotal.checked_add(batteries))
            .ok_or_else(overflow)?;
        let installation = equipment_total.fraction(installation_rate);
        let total = equipment_total.checked_add(installation).ok_or_else(overflow)?;
        Ok(Self { panels, inverter, batteries, equipment_total, installation, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            Capacity,
            test_utils::{battery, inverter, panel},
        },
        quantity::{KilowattHours, Watts},
    };

    fn configuration(panel_count: u32, battery_count: u32) -> SystemConfiguration {
        SystemConfiguration {
            capacity: Capacity {
                daily_consumption: KilowattHours(15.0),
                array_power: Watts(3750),
                usable_storage: KilowattHours(30.0),
            },
            panel: panel("JKM400M-54HL4", 400, 5030.82),
            panel_count,
            inverter: inverter("SUN-5K-SG04", 5.0, 650_000.10),
            battery: battery("LV-1200", 1.2, 5030.82),
            battery_count,
        }
    }

    #[test]
    fn test_reference_household() -> Result {
        let breakdown = CostBreakdown::estimate(&configuration(10, 25), Proportion(0.15))?;
        assert_eq!(breakdown.panels, Cost::from_naira(50_308.20));
        assert_eq!(breakdown.inverter, Cost::from_naira(650_000.10));
        assert_eq!(breakdown.batteries, Cost::from_naira(125_770.50));
        assert_eq!(breakdown.equipment_total, Cost(82_607_880));
        assert_eq!(breakdown.installation, Cost(12_391_182));
        assert_eq!(breakdown.total, Cost(94_999_062));
        Ok(())
    }

    #[test]
    fn test_totals_are_exact_sums() -> Result {
        for rate in [0.0, 0.1, 0.15, 0.333, 1.0] {
            for (panel_count, battery_count) in [(1, 1), (3, 7), (17, 43), (250, 999)] {
                let system = configuration(panel_count, battery_count);
                let breakdown = CostBreakdown::estimate(&system, Proportion(rate))?;
                assert_eq!(
                    breakdown.equipment_total,
                    breakdown.panels + breakdown.inverter + breakdown.batteries,
                );
                assert_eq!(breakdown.total, breakdown.equipment_total + breakdown.installation);
            }
        }
        Ok(())
    }

    #[test]
    fn test_zero_installation_rate() -> Result {
        let breakdown = CostBreakdown::estimate(&configuration(10, 25), Proportion::ZERO)?;
        assert_eq!(breakdown.installation, Cost::ZERO);
        assert_eq!(breakdown.total, breakdown.equipment_total);
        Ok(())
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut system = configuration(u32::MAX, 25);
        system.panel.unit_price = Cost::MAX_UNIT_PRICE;
        assert!(matches!(
            CostBreakdown::estimate(&system, Proportion(0.15)),
            Err(Error::InvalidInput(_))
        ));

        let mut system = configuration(1, 1);
        system.panel.unit_price = Cost(i64::MAX / 2);
        system.battery.unit_price = Cost(i64::MAX / 2 + 1);
        assert!(CostBreakdown::estimate(&system, Proportion::ZERO).is_err());
    }
}
