use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use sunplan::{
    catalog::{Battery, Component, Inverter, Panel},
    core::{BudgetVerdict, Recommendation},
    quantity::Cost,
};

use crate::fmt::FormattedCost;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

fn brand_cell(brand: Option<&str>) -> Cell {
    brand.map_or_else(|| Cell::new("-").add_attribute(Attribute::Dim), Cell::new)
}

pub fn build_requirement_table(recommendation: &Recommendation) -> Table {
    let requirement = &recommendation.requirement;
    let assumptions = &recommendation.assumptions;
    let capacity = &recommendation.configuration.capacity;

    let mut table = new_table();
    table.set_header(vec!["Requirement", "Value"]);
    table.add_row(vec![Cell::new("Monthly consumption"), right(requirement.monthly_consumption)]);
    table.add_row(vec![Cell::new("Daily consumption"), right(capacity.daily_consumption)]);
    table.add_row(vec![
        Cell::new("Budget"),
        requirement.budget.map_or_else(
            || right("none").add_attribute(Attribute::Dim),
            |budget| right(FormattedCost(budget)),
        ),
    ]);
    table.add_row(vec![Cell::new("Autonomy"), right(format!("{} days", requirement.autonomy_days))]);
    table.add_row(vec![
        Cell::new("Peak sun hours").add_attribute(Attribute::Dim),
        right(assumptions.peak_sun_hours).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("System efficiency").add_attribute(Attribute::Dim),
        right(assumptions.system_efficiency).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Array power").add_attribute(Attribute::Bold),
        right(capacity.array_power),
    ]);
    table.add_row(vec![
        Cell::new("Usable storage").add_attribute(Attribute::Bold),
        right(capacity.usable_storage),
    ]);
    table
}

pub fn build_components_table(recommendation: &Recommendation) -> Table {
    let configuration = &recommendation.configuration;
    let cost_breakdown = &recommendation.cost_breakdown;

    let mut table = new_table();
    table.set_header(vec![
        "Component",
        "Model",
        "Unit",
        "Count",
        "Combined",
        "Unit price",
        "Subtotal",
    ]);
    table.add_row(vec![
        Cell::new("Panels"),
        Cell::new(configuration.panel.label()),
        right(configuration.panel.wattage),
        right(configuration.panel_count),
        right(configuration.array_power()).fg(Color::Green),
        right(FormattedCost(configuration.panel.unit_price)),
        right(FormattedCost(cost_breakdown.panels)),
    ]);
    table.add_row(vec![
        Cell::new("Inverter"),
        Cell::new(configuration.inverter.label()),
        right(configuration.inverter.rating),
        right(1),
        right(configuration.inverter.rating).fg(Color::Green),
        right(FormattedCost(configuration.inverter.unit_price)),
        right(FormattedCost(cost_breakdown.inverter)),
    ]);
    table.add_row(vec![
        Cell::new("Batteries"),
        Cell::new(configuration.battery.label()),
        right(configuration.battery.usable_capacity),
        right(configuration.battery_count),
        right(configuration.storage_capacity()).fg(Color::Green),
        right(FormattedCost(configuration.battery.unit_price)),
        right(FormattedCost(cost_breakdown.batteries)),
    ]);
    table
}

pub fn build_cost_table(recommendation: &Recommendation) -> Table {
    let cost_breakdown = &recommendation.cost_breakdown;
    let verdict_color = match recommendation.within_budget {
        BudgetVerdict::Within => Color::Green,
        BudgetVerdict::Over => Color::Red,
        BudgetVerdict::NotApplicable => Color::Reset,
    };

    let mut table = new_table();
    table.set_header(vec!["Cost", "Amount"]);
    table.add_row(vec![Cell::new("Panels"), right(FormattedCost(cost_breakdown.panels))]);
    table.add_row(vec![Cell::new("Inverter"), right(FormattedCost(cost_breakdown.inverter))]);
    table.add_row(vec![Cell::new("Batteries"), right(FormattedCost(cost_breakdown.batteries))]);
    table.add_row(vec![
        Cell::new("Equipment").add_attribute(Attribute::Bold),
        right(FormattedCost(cost_breakdown.equipment_total)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Installation ({})", recommendation.assumptions.installation_rate)),
        right(FormattedCost(cost_breakdown.installation)),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right(FormattedCost(cost_breakdown.total)).add_attribute(Attribute::Bold).fg(verdict_color),
    ]);
    if let Some(budget) = recommendation.requirement.budget {
        table.add_row(vec![Cell::new("Budget"), right(FormattedCost(budget))]);
    }
    if let Some(overshoot) = recommendation.over_budget_by() {
        table.add_row(vec![
            Cell::new("Over by").fg(Color::Red),
            right(FormattedCost(overshoot)).fg(Color::Red),
        ]);
    }
    table
}

/// Single-cell verdict banner, [`None`] when no budget was given.
pub fn build_verdict_table(recommendation: &Recommendation) -> Option<Table> {
    let cell = match recommendation.within_budget {
        BudgetVerdict::NotApplicable => return None,
        BudgetVerdict::Within => Cell::new("✓ Within budget").fg(Color::Green),
        BudgetVerdict::Over => {
            let overshoot = recommendation.over_budget_by().unwrap_or(Cost::ZERO);
            Cell::new(format!("✗ Over budget by {}", FormattedCost(overshoot))).fg(Color::Red)
        }
    };
    let mut table = new_table();
    table.add_row(vec![cell.add_attribute(Attribute::Bold)]);
    Some(table)
}

pub fn build_panels_table(panels: &[Panel]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Panel", "Brand", "Wattage", "Unit price"]);
    for panel in panels {
        table.add_row(vec![
            Cell::new(&panel.model),
            brand_cell(panel.brand()),
            right(panel.wattage),
            right(FormattedCost(panel.unit_price)),
        ]);
    }
    table
}

pub fn build_inverters_table(inverters: &[Inverter]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Inverter", "Brand", "Rating", "Unit price"]);
    for inverter in inverters {
        table.add_row(vec![
            Cell::new(&inverter.model),
            brand_cell(inverter.brand()),
            right(inverter.rating),
            right(FormattedCost(inverter.unit_price)),
        ]);
    }
    table
}

pub fn build_batteries_table(batteries: &[Battery]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Battery", "Brand", "Usable capacity", "Unit price"]);
    for battery in batteries {
        table.add_row(vec![
            Cell::new(&battery.model),
            brand_cell(battery.brand()),
            right(battery.usable_capacity),
            right(FormattedCost(battery.unit_price)),
        ]);
    }
    table
}
