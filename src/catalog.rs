//! Read-only catalog of the panels, inverters, and batteries available for sizing.

mod component;
mod file;

use itertools::Itertools;
use serde::Serialize;

pub use self::{
    component::{Battery, Component, Inverter, Panel},
    file::{from_toml_str, load},
};
use crate::prelude::*;

/// Validated component catalog.
///
/// Iteration order within each category is the insertion order, and the sizer uses it as the last
/// tie-break. The catalog is never mutated after construction, so it may be shared by reference
/// across threads.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Catalog {
    panels: Vec<Panel>,
    inverters: Vec<Inverter>,
    batteries: Vec<Battery>,
}

impl Catalog {
    /// Build the catalog, rejecting duplicate models and out-of-range ratings or prices.
    pub fn try_new(
        panels: Vec<Panel>,
        inverters: Vec<Inverter>,
        batteries: Vec<Battery>,
    ) -> Result<Self> {
        validate(&panels)?;
        validate(&inverters)?;
        validate(&batteries)?;
        Ok(Self { panels, inverters, batteries })
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn inverters(&self) -> &[Inverter] {
        &self.inverters
    }

    pub fn batteries(&self) -> &[Battery] {
        &self.batteries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len() + self.inverters.len() + self.batteries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate<C: Component>(components: &[C]) -> Result {
    for component in components {
        component.validate()?;
    }
    if let Some(model) = components.iter().map(Component::model).duplicates().next() {
        return Err(Error::catalog_unavailable(format!(
            "duplicate {} model `{model}`",
            C::CATEGORY,
        )));
    }
    Ok(())
}
