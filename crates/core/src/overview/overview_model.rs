use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::backend::{Card, Transaction};
use crate::budget::BudgetSummary;
use crate::goals::GoalSource;

/// Cards shown on the dashboard.
pub const FEATURED_CARDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOverview {
    pub transactions: Vec<Transaction>,
    pub card_count: usize,
    pub featured_cards: Vec<Card>,
    pub goal: GoalSource,
    pub budget: BudgetSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsOverview {
    pub categories: Vec<CategoryTotal>,
    pub goal: GoalSource,
    pub budget: BudgetSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancesOverview {
    pub transactions: Vec<Transaction>,
    pub total_spend: Decimal,
    pub pending: Decimal,
    pub categories: Vec<String>,
    pub months: Vec<String>,
}
