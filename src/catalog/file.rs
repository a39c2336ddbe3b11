//! TOML catalog files.
//!
//! ```toml
//! [[panels]]
//! model = "JKM400M-54HL4"
//! brand = "Jinko"
//! wattage = 400
//! price = 5030.82
//!
//! [[inverters]]
//! model = "SUN-5K-SG04"
//! rating_kw = 5.0
//! price = 650000.0
//!
//! [[batteries]]
//! model = "US2000C"
//! nameplate_capacity_kwh = 2.4
//! price = 720000.0
//! ```
//!
//! Prices are in naira and are rounded to the nearest kobo.
//! A battery states exactly one of `usable_capacity_kwh` and `nameplate_capacity_kwh`.

use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{
    catalog::{Battery, Catalog, Inverter, Panel},
    prelude::*,
    quantity::{Cost, KilowattHours, Kilowatts, Proportion, Watts},
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    panels: Vec<PanelRow>,

    #[serde(default)]
    inverters: Vec<InverterRow>,

    #[serde(default)]
    batteries: Vec<BatteryRow>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PanelRow {
    model: String,
    brand: Option<String>,
    wattage: u64,
    price: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct InverterRow {
    model: String,
    brand: Option<String>,
    rating_kw: f64,
    price: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BatteryRow {
    model: String,
    brand: Option<String>,
    usable_capacity_kwh: Option<f64>,
    nameplate_capacity_kwh: Option<f64>,
    price: f64,
}

/// Read, parse, and validate a catalog file.
///
/// Nameplate battery capacities are derated by `depth_of_discharge` here, once,
/// so that the engine only ever sees usable capacity.
#[instrument(skip(depth_of_discharge))]
pub fn load<P: AsRef<Path> + Debug>(path: P, depth_of_discharge: Proportion) -> Result<Catalog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| {
        Error::catalog_unavailable(format!("failed to read `{}`: {error}", path.display()))
    })?;
    let catalog = from_toml_str(&text, depth_of_discharge).map_err(|error| match error {
        Error::CatalogUnavailable(reason) => {
            Error::catalog_unavailable(format!("`{}`: {reason}", path.display()))
        }
        error => error,
    })?;
    debug!(
        n_panels = catalog.panels().len(),
        n_inverters = catalog.inverters().len(),
        n_batteries = catalog.batteries().len(),
        "loaded the catalog",
    );
    Ok(catalog)
}

pub fn from_toml_str(text: &str, depth_of_discharge: Proportion) -> Result<Catalog> {
    if !(depth_of_discharge.is_unit_interval() && depth_of_discharge > Proportion::ZERO) {
        return Err(Error::invalid_input(format!(
            "battery depth of discharge must be within (0%, 100%], got {depth_of_discharge}",
        )));
    }
    let file: CatalogFile = toml::from_str(text)
        .map_err(|error| Error::catalog_unavailable(format!("malformed catalog: {error}")))?;

    let panels = file
        .panels
        .into_iter()
        .map(|row| {
            Ok(Panel {
                unit_price: parse_price(&row.model, row.price)?,
                model: row.model,
                brand: row.brand,
                wattage: Watts(row.wattage),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let inverters = file
        .inverters
        .into_iter()
        .map(|row| {
            Ok(Inverter {
                unit_price: parse_price(&row.model, row.price)?,
                model: row.model,
                brand: row.brand,
                rating: Kilowatts(row.rating_kw),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let batteries = file
        .batteries
        .into_iter()
        .map(|row| {
            let usable_capacity = match (row.usable_capacity_kwh, row.nameplate_capacity_kwh) {
                (Some(usable), None) => KilowattHours(usable),
                (None, Some(nameplate)) => KilowattHours(nameplate) * depth_of_discharge.0,
                (Some(_), Some(_)) => {
                    return Err(Error::catalog_unavailable(format!(
                        "battery `{}` states both usable and nameplate capacity",
                        row.model,
                    )));
                }
                (None, None) => {
                    return Err(Error::catalog_unavailable(format!(
                        "battery `{}` states no capacity",
                        row.model,
                    )));
                }
            };
            Ok(Battery {
                unit_price: parse_price(&row.model, row.price)?,
                model: row.model,
                brand: row.brand,
                usable_capacity,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::try_new(panels, inverters, batteries)
}

fn parse_price(model: &str, naira: f64) -> Result<Cost> {
    if naira.is_finite() {
        Ok(Cost::from_naira(naira))
    } else {
        Err(Error::catalog_unavailable(format!("`{model}` has a non-finite price")))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const DOD: Proportion = Proportion(0.8);

    #[test]
    fn test_from_toml_str_ok() -> Result {
        // language=TOML
        const CATALOG: &str = r#"
            [[panels]]
            model = "JKM400M"
            brand = "Jinko"
            wattage = 400
            price = 5030.82

            [[inverters]]
            model = "SUN-5K"
            rating_kw = 5.0
            price = 650000

            [[batteries]]
            model = "LV-1.2"
            usable_capacity_kwh = 1.2
            price = 5030.82

            [[batteries]]
            model = "US2000C"
            nameplate_capacity_kwh = 2.4
            price = 720000.0
        "#;
        let catalog = from_toml_str(CATALOG, DOD)?;

        assert_eq!(catalog.panels()[0].unit_price, Cost(503_082));
        assert_eq!(catalog.panels()[0].brand.as_deref(), Some("Jinko"));
        assert_eq!(catalog.inverters()[0].unit_price, Cost(65_000_000));
        assert_abs_diff_eq!(catalog.batteries()[0].usable_capacity.0, 1.2);
        assert_abs_diff_eq!(catalog.batteries()[1].usable_capacity.0, 1.92, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_file_gives_empty_catalog() -> Result {
        assert!(from_toml_str("", DOD)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_both_capacities_rejected() {
        // language=TOML
        const CATALOG: &str = r#"
            [[batteries]]
            model = "B"
            usable_capacity_kwh = 1.2
            nameplate_capacity_kwh = 1.5
            price = 1.0
        "#;
        assert!(matches!(from_toml_str(CATALOG, DOD), Err(Error::CatalogUnavailable(_))));
    }

    #[test]
    fn test_absurd_price_rejected() {
        // language=TOML
        const CATALOG: &str = r#"
            [[panels]]
            model = "P"
            wattage = 400
            price = 1e17
        "#;
        assert!(matches!(from_toml_str(CATALOG, DOD), Err(Error::CatalogUnavailable(_))));
    }

    #[test]
    fn test_missing_capacity_rejected() {
        // language=TOML
        const CATALOG: &str = r#"
            [[batteries]]
            model = "B"
            price = 1.0
        "#;
        assert!(matches!(from_toml_str(CATALOG, DOD), Err(Error::CatalogUnavailable(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        // language=TOML
        const CATALOG: &str = r#"
            [[panels]]
            model = "P"
            wattage = 400
            price = 1.0
            colour = "black"
        "#;
        assert!(matches!(from_toml_str(CATALOG, DOD), Err(Error::CatalogUnavailable(_))));
    }

    #[test]
    fn test_invalid_depth_of_discharge_rejected() {
        assert!(matches!(from_toml_str("", Proportion::ZERO), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/catalog.toml", DOD);
        assert!(
            matches!(result, Err(Error::CatalogUnavailable(ref reason)) if reason.contains("/nonexistent/catalog.toml"))
        );
    }
}
