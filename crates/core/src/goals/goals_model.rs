//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the user's active spending goal comes from.
///
/// Exactly one source is authoritative: the most recently added card when the
/// user has any, the onboarding survey otherwise. `Unset` is the degraded state
/// where neither source yields a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum GoalSource {
    FromCard { card_id: String, value: Decimal },
    FromSurvey { value: Decimal },
    Unset,
}

impl GoalSource {
    /// The goal amount, `0` when unset.
    pub fn value(&self) -> Decimal {
        match self {
            GoalSource::FromCard { value, .. } | GoalSource::FromSurvey { value } => *value,
            GoalSource::Unset => Decimal::ZERO,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, GoalSource::Unset)
    }
}
