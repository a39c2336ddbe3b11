pub mod catalog;
pub mod prompt;
pub mod recommend;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sunplan::{
    catalog::Catalog,
    core::Assumptions,
    quantity::{Cost, Hours, KilowattHours, Proportion},
};

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: size a system for the household and estimate its cost.
    #[clap(name = "recommend")]
    Recommend(Box<RecommendArgs>),

    /// List the components available in the catalog.
    #[clap(name = "catalog")]
    Catalog(Box<CatalogCommandArgs>),
}

#[derive(Parser)]
pub struct RecommendArgs {
    /// Average monthly consumption in kilowatt-hours, prompted for when omitted.
    #[clap(long = "monthly-consumption", env = "MONTHLY_CONSUMPTION")]
    pub monthly_consumption: Option<KilowattHours>,

    /// Total budget in naira.
    #[clap(long)]
    pub budget: Option<f64>,

    /// Days the battery bank must last without sun.
    #[clap(long = "autonomy-days", allow_negative_numbers = true)]
    pub autonomy_days: Option<i32>,

    /// Print the recommendation as JSON instead of tables.
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[clap(flatten)]
    pub assumptions: AssumptionArgs,
}

#[derive(Parser)]
pub struct CatalogCommandArgs {
    #[clap(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Component catalog file.
    #[clap(long = "catalog", default_value = "data/catalog.toml", env = "SUNPLAN_CATALOG")]
    pub path: PathBuf,

    /// Usable fraction of nameplate battery capacity, applied to `nameplate_capacity_kwh` entries.
    #[clap(
        long = "battery-depth-of-discharge",
        default_value = "0.8",
        env = "BATTERY_DEPTH_OF_DISCHARGE"
    )]
    pub depth_of_discharge: Proportion,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        sunplan::catalog::load(&self.path, self.depth_of_discharge)
            .with_context(|| format!("failed to load the catalog from `{}`", self.path.display()))
    }
}

#[derive(Copy, Clone, Parser)]
pub struct AssumptionArgs {
    /// Average daily peak sun hours.
    #[clap(long = "peak-sun-hours", default_value = "5.0", env = "PEAK_SUN_HOURS")]
    pub peak_sun_hours: Hours,

    /// Fraction of the harvested energy that survives inverter, wiring, and charge losses.
    #[clap(long = "system-efficiency", default_value = "0.8", env = "SYSTEM_EFFICIENCY")]
    pub system_efficiency: Proportion,

    /// Installation and balance-of-system costs as a fraction of the equipment total.
    #[clap(long = "installation-rate", default_value = "0.15", env = "INSTALLATION_RATE")]
    pub installation_rate: Proportion,
}

impl RecommendArgs {
    pub fn assumptions(&self) -> Assumptions {
        Assumptions::builder()
            .peak_sun_hours(self.assumptions.peak_sun_hours)
            .system_efficiency(self.assumptions.system_efficiency)
            .battery_depth_of_discharge(self.catalog.depth_of_discharge)
            .installation_rate(self.assumptions.installation_rate)
            .build()
    }

    pub fn budget(&self) -> Result<Option<Cost>> {
        self.budget.map(parse_budget).transpose()
    }
}

/// Convert a naira amount given on the command line.
pub fn parse_budget(naira: f64) -> Result<Cost> {
    ensure!(naira.is_finite(), "the budget must be a finite amount, got {naira}");
    Ok(Cost::from_naira(naira))
}
