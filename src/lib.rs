//! Off-grid solar system sizing.
//!
//! Turns a household's monthly consumption, budget, and desired battery autonomy into a panel array,
//! an inverter, a battery bank, and an itemized cost estimate:
//!
//! ```
//! use sunplan::{
//!     catalog,
//!     core::{BudgetVerdict, Engine, Requirement},
//!     quantity::{Cost, KilowattHours, Proportion},
//! };
//!
//! # fn main() -> Result<(), sunplan::Error> {
//! let catalog = catalog::from_toml_str(
//!     r#"
//!         [[panels]]
//!         model = "JKM400M-54HL4"
//!         wattage = 400
//!         price = 5030.82
//!
//!         [[inverters]]
//!         model = "SUN-5K-SG04"
//!         rating_kw = 5.0
//!         price = 650000
//!
//!         [[batteries]]
//!         model = "LV-1200"
//!         usable_capacity_kwh = 1.2
//!         price = 5030.82
//!     "#,
//!     Proportion(0.8),
//! )?;
//! let requirement = Requirement::builder()
//!     .monthly_consumption(KilowattHours(450.0))
//!     .budget(Cost::from_naira(1_000_000.0))
//!     .build();
//! let recommendation = Engine::builder().catalog(&catalog).build().recommend(&requirement)?;
//!
//! assert_eq!(recommendation.configuration.panel_count, 10);
//! assert_eq!(recommendation.configuration.battery_count, 25);
//! assert_eq!(recommendation.within_budget, BudgetVerdict::Within);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod core;
pub mod error;
mod prelude;
pub mod quantity;

pub use crate::error::Error;
