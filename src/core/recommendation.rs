use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{Assumptions, CostBreakdown, Requirement, SystemConfiguration},
    quantity::Cost,
};

/// Whether the estimate fits the budget.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetVerdict {
    /// The total cost is at or under the budget.
    Within,

    /// The total cost exceeds the budget.
    Over,

    /// No budget was given.
    NotApplicable,
}

impl BudgetVerdict {
    /// Exact equality counts as within the budget.
    #[must_use]
    pub fn new(total: Cost, budget: Option<Cost>) -> Self {
        match budget {
            None => Self::NotApplicable,
            Some(budget) if total <= budget => Self::Within,
            Some(_) => Self::Over,
        }
    }
}

impl Display for BudgetVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Within => write!(f, "within budget"),
            Self::Over => write!(f, "over budget"),
            Self::NotApplicable => write!(f, "no budget"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub requirement: Requirement,
    pub assumptions: Assumptions,
    pub configuration: SystemConfiguration,
    pub cost_breakdown: CostBreakdown,
    pub within_budget: BudgetVerdict,
}

impl Recommendation {
    /// Amount by which the total cost exceeds the budget.
    #[must_use]
    pub fn over_budget_by(&self) -> Option<Cost> {
        match (self.within_budget, self.requirement.budget) {
            (BudgetVerdict::Over, Some(budget)) => Some(self.cost_breakdown.total - budget),
            _ => None,
        }
    }
}
