use rust_decimal::{Decimal, RoundingStrategy};

use crate::backend::Transaction;
use crate::budget::budget_model::BudgetSummary;
use crate::errors::{Error, Result};
use crate::goals::GoalSource;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds a monetary value half-up to cents.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Exact sum of `values`; fails instead of overflowing.
pub fn checked_total<I>(values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| Error::invalid_data("amounts overflow the decimal range"))
    })
}

/// Exact decimal sum of all amounts, rounded once at the end.
pub fn sum_amounts<'a, I>(transactions: I) -> Result<Decimal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    checked_total(transactions.into_iter().map(|t| t.amount)).map(round_money)
}

pub fn aggregate(transactions: &[Transaction], goal: &GoalSource) -> Result<BudgetSummary> {
    aggregate_totals(sum_amounts(transactions)?, goal)
}

/// Budget figures for an already summed spend.
pub fn aggregate_totals(total_spend: Decimal, goal: &GoalSource) -> Result<BudgetSummary> {
    let total_spend = round_money(total_spend);
    let (goal_value, goal_unset) = match goal {
        GoalSource::FromCard { value, .. } | GoalSource::FromSurvey { value } => (*value, false),
        GoalSource::Unset => (Decimal::ZERO, true),
    };
    let remaining_budget = goal_value
        .checked_sub(total_spend)
        .map(round_money)
        .ok_or_else(|| Error::invalid_data("remaining budget overflows the decimal range"))?;

    Ok(BudgetSummary {
        goal: goal_value,
        total_spend,
        remaining_budget,
        spend_percentage: spend_percentage(total_spend, goal_value),
        over_budget: remaining_budget.is_sign_negative() && !remaining_budget.is_zero(),
        goal_unset,
    })
}

fn spend_percentage(total_spend: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let raw = total_spend
        .checked_div(goal)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .unwrap_or(ONE_HUNDRED);
    round_money(raw.clamp(Decimal::ZERO, ONE_HUNDRED))
}
