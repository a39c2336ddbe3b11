use bon::Builder;

use crate::{
    catalog::Catalog,
    core::{
        Assumptions,
        BudgetVerdict,
        CostBreakdown,
        Recommendation,
        Requirement,
        compute_capacity,
        size,
    },
    prelude::*,
};

/// Recommendation engine bound to a catalog.
///
/// The engine holds no mutable state: one instance may serve any number of threads.
#[derive(Builder, Copy, Clone)]
pub struct Engine<'a> {
    catalog: &'a Catalog,

    #[builder(default)]
    assumptions: Assumptions,
}

impl Engine<'_> {
    /// Capacity → sizing → cost → budget verdict, aborting on the first failing stage.
    #[instrument(skip_all, fields(monthly_consumption = %requirement.monthly_consumption))]
    pub fn recommend(&self, requirement: &Requirement) -> Result<Recommendation> {
        let capacity = compute_capacity(requirement, &self.assumptions)?;
        let configuration = size(&capacity, self.catalog)?;
        let cost_breakdown =
            CostBreakdown::estimate(&configuration, self.assumptions.installation_rate)?;
        let within_budget = BudgetVerdict::new(cost_breakdown.total, requirement.budget);
        debug!(total = %cost_breakdown.total, %within_budget, "estimated");

        Ok(Recommendation {
            requirement: requirement.clone(),
            assumptions: self.assumptions,
            configuration,
            cost_breakdown,
            within_budget,
        })
    }
}

/// Shorthand for a one-off [`Engine::recommend`].
pub fn recommend(
    requirement: &Requirement,
    catalog: &Catalog,
    assumptions: Assumptions,
) -> Result<Recommendation> {
    Engine::builder().catalog(catalog).assumptions(assumptions).build().recommend(requirement)
}
