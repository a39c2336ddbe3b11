//! The recommendation engine: capacity, sizing, costing, and the budget verdict.

mod assumptions;
mod capacity;
mod configuration;
mod cost;
mod engine;
mod recommendation;
mod requirement;
mod sizer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::{
    assumptions::Assumptions,
    capacity::{Capacity, DAYS_IN_MONTH, compute_capacity},
    configuration::SystemConfiguration,
    cost::CostBreakdown,
    engine::{Engine, recommend},
    recommendation::{BudgetVerdict, Recommendation},
    requirement::{DEFAULT_AUTONOMY_DAYS, Requirement},
    sizer::size,
};
