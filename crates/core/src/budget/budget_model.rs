use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived spending figures for one request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub goal: Decimal,
    pub total_spend: Decimal,
    /// `goal - total_spend`; negative when over budget.
    pub remaining_budget: Decimal,
    /// Display value in `[0, 100]`; `0` when no usable goal exists.
    pub spend_percentage: Decimal,
    pub over_budget: bool,
    pub goal_unset: bool,
}
