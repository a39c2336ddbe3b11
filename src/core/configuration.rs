use serde::Serialize;

use crate::{
    catalog::{Battery, Inverter, Panel},
    core::Capacity,
    quantity::{KilowattHours, Watts},
};

/// Concrete component selection.
///
/// Invariants, established by [`crate::core::size`]:
///
/// - the array power covers [`Capacity::array_power`];
/// - the storage capacity covers [`Capacity::usable_storage`];
/// - the inverter rating covers the array power.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemConfiguration {
    /// What the configuration was sized for.
    pub capacity: Capacity,

    pub panel: Panel,
    pub panel_count: u32,

    pub inverter: Inverter,

    pub battery: Battery,
    pub battery_count: u32,
}

impl SystemConfiguration {
    /// Combined nameplate power of all the panels.
    pub fn array_power(&self) -> Watts {
        self.panel.wattage * self.panel_count
    }

    /// Combined usable capacity of the battery bank.
    pub fn storage_capacity(&self) -> KilowattHours {
        self.battery.usable_capacity * self.battery_count
    }
}
