//! Errors raised by the recommendation engine and the catalog loader.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Category of a catalog component.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Panel,
    Inverter,
    Battery,
}

impl Display for ComponentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panel => write!(f, "panel"),
            Self::Inverter => write!(f, "inverter"),
            Self::Battery => write!(f, "battery"),
        }
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A requirement or design assumption violates its constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No catalog entry in the category satisfies the sizing constraint.
    #[error("no suitable {category}: {reason}")]
    NoSuitableComponent { category: ComponentCategory, reason: String },

    /// The catalog could not be loaded or failed validation.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub(crate) fn no_suitable(category: ComponentCategory, reason: impl Into<String>) -> Self {
        Self::NoSuitableComponent { category, reason: reason.into() }
    }

    pub(crate) fn catalog_unavailable(reason: impl Into<String>) -> Self {
        Self::CatalogUnavailable(reason.into())
    }
}
