//! Budget module - spend totals and goal consumption.

mod budget_calculator;
mod budget_model;

pub use budget_calculator::{aggregate, aggregate_totals, checked_total, round_money, sum_amounts};
pub use budget_model::BudgetSummary;
