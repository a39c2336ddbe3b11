//! Component selection.
//!
//! Every category picks a single candidate under a total order:
//!
//! | Category | Primary key                       | Tie-break      | Final key     |
//! |----------|-----------------------------------|----------------|---------------|
//! | Panel    | highest wattage                   | lowest price   | catalog order |
//! | Battery  | largest usable capacity           | lowest price   | catalog order |
//! | Inverter | smallest rating covering array    | lowest price   | catalog order |
//!
//! [`Iterator::min_by_key`] returns the first of several equal minima, which provides the final key.

use std::cmp::Reverse;

use crate::{
    catalog::{Battery, Catalog, Inverter, Panel},
    core::{Capacity, SystemConfiguration},
    error::ComponentCategory,
    prelude::*,
    quantity::{Watts, ceil_tolerant},
};

/// Pick the panel, inverter, and battery models and counts for the capacity.
#[instrument(skip_all, fields(array_power = %capacity.array_power, usable_storage = %capacity.usable_storage))]
pub fn size(capacity: &Capacity, catalog: &Catalog) -> Result<SystemConfiguration> {
    let panel = select_panel(catalog.panels()).ok_or_else(|| {
        Error::no_suitable(ComponentCategory::Panel, "the catalog lists no panels")
    })?;
    let panel_count = count_panels(capacity.array_power, panel)?;
    let array_power = panel.wattage * panel_count;
    debug!(model = %panel.model, panel_count, %array_power, "selected the panels");

    let inverter = select_inverter(catalog.inverters(), array_power).ok_or_else(|| {
        Error::no_suitable(
            ComponentCategory::Inverter,
            format!("no inverter is rated for the {array_power} array"),
        )
    })?;
    debug!(model = %inverter.model, rating = %inverter.rating, "selected the inverter");

    let battery = select_battery(catalog.batteries()).ok_or_else(|| {
        Error::no_suitable(ComponentCategory::Battery, "the catalog lists no batteries")
    })?;
    let battery_count = count_batteries(capacity, battery)?;
    debug!(model = %battery.model, battery_count, "selected the batteries");

    Ok(SystemConfiguration {
        capacity: *capacity,
        panel: panel.clone(),
        panel_count,
        inverter: inverter.clone(),
        battery: battery.clone(),
        battery_count,
    })
}

fn select_panel(panels: &[Panel]) -> Option<&Panel> {
    panels.iter().min_by_key(|panel| (Reverse(panel.wattage), panel.unit_price))
}

fn select_battery(batteries: &[Battery]) -> Option<&Battery> {
    batteries.iter().min_by_key(|battery| (Reverse(battery.usable_capacity), battery.unit_price))
}

fn select_inverter(inverters: &[Inverter], array_power: Watts) -> Option<&Inverter> {
    inverters
        .iter()
        .filter(|inverter| inverter.rating.covers(array_power))
        .min_by_key(|inverter| (inverter.rating, inverter.unit_price))
}

/// Smallest panel count whose combined wattage covers the required array power, at least one.
fn count_panels(array_power: Watts, panel: &Panel) -> Result<u32> {
    let count = array_power.0.div_ceil(panel.wattage.0).max(1);
    u32::try_from(count).map_err(|_| {
        Error::no_suitable(
            ComponentCategory::Panel,
            format!("{count} × `{}` panels is beyond residential scale", panel.model),
        )
    })
}

/// Smallest battery count whose combined usable capacity covers the storage, at least one.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_batteries(capacity: &Capacity, battery: &Battery) -> Result<u32> {
    let count = ceil_tolerant(capacity.usable_storage / battery.usable_capacity).max(1.0);
    if count.is_finite() && count <= f64::from(u32::MAX) {
        Ok(count as u32)
    } else {
        Err(Error::no_suitable(
            ComponentCategory::Battery,
            format!("`{}` is too small for {}", battery.model, capacity.usable_storage),
        ))
    }
}
