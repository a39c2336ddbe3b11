use bon::Builder;
use serde::Serialize;

use crate::{
    error::ComponentCategory,
    prelude::*,
    quantity::{Cost, KilowattHours, Kilowatts, Watts},
};

/// Common view over a catalog row.
pub trait Component {
    const CATEGORY: ComponentCategory;

    fn model(&self) -> &str;

    fn brand(&self) -> Option<&str>;

    fn unit_price(&self) -> Cost;

    /// Check the category-specific rating.
    fn validate_rating(&self) -> Result;

    /// Brand and model for display, for example `Jinko JKM400M`.
    fn label(&self) -> String {
        match self.brand() {
            Some(brand) => format!("{brand} {}", self.model()),
            None => self.model().to_owned(),
        }
    }

    fn validate(&self) -> Result {
        if self.model().trim().is_empty() {
            return Err(Error::catalog_unavailable(format!("{} with an empty model", Self::CATEGORY)));
        }
        if self.unit_price() < Cost::ZERO {
            return Err(Error::catalog_unavailable(format!(
                "{} `{}` has a negative price ({})",
                Self::CATEGORY,
                self.model(),
                self.unit_price(),
            )));
        }
        if self.unit_price() > Cost::MAX_UNIT_PRICE {
            return Err(Error::catalog_unavailable(format!(
                "{} `{}` is priced above {}",
                Self::CATEGORY,
                self.model(),
                Cost::MAX_UNIT_PRICE,
            )));
        }
        self.validate_rating()
    }
}

#[must_use]
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub brand: Option<String>,

    /// Nameplate power of a single panel.
    pub wattage: Watts,

    pub unit_price: Cost,
}

#[must_use]
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
pub struct Inverter {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub brand: Option<String>,

    /// Continuous output rating.
    pub rating: Kilowatts,

    pub unit_price: Cost,
}

#[must_use]
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
pub struct Battery {
    #[builder(into)]
    pub model: String,

    #[builder(into)]
    pub brand: Option<String>,

    /// Energy available per cycle, already net of the depth of discharge.
    ///
    /// The sizer never derates this value again. Catalog files that state the nameplate capacity
    /// instead are derated once while loading, see [`crate::catalog::load`].
    pub usable_capacity: KilowattHours,

    pub unit_price: Cost,
}

impl Component for Panel {
    const CATEGORY: ComponentCategory = ComponentCategory::Panel;

    fn model(&self) -> &str {
        &self.model
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn unit_price(&self) -> Cost {
        self.unit_price
    }

    fn validate_rating(&self) -> Result {
        if self.wattage > Watts::ZERO {
            Ok(())
        } else {
            Err(Error::catalog_unavailable(format!("panel `{}` has zero wattage", self.model)))
        }
    }
}

impl Component for Inverter {
    const CATEGORY: ComponentCategory = ComponentCategory::Inverter;

    fn model(&self) -> &str {
        &self.model
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn unit_price(&self) -> Cost {
        self.unit_price
    }

    fn validate_rating(&self) -> Result {
        if self.rating.0.is_finite() && self.rating > Kilowatts::ZERO {
            Ok(())
        } else {
            Err(Error::catalog_unavailable(format!(
                "inverter `{}` has an invalid rating ({})",
                self.model, self.rating,
            )))
        }
    }
}

impl Component for Battery {
    const CATEGORY: ComponentCategory = ComponentCategory::Battery;

    fn model(&self) -> &str {
        &self.model
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn unit_price(&self) -> Cost {
        self.unit_price
    }

    fn validate_rating(&self) -> Result {
        if self.usable_capacity.0.is_finite() && self.usable_capacity > KilowattHours::ZERO {
            Ok(())
        } else {
            Err(Error::catalog_unavailable(format!(
                "battery `{}` has an invalid usable capacity ({})",
                self.model, self.usable_capacity,
            )))
        }
    }
}
