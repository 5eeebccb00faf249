use crate::backend::{Card, UserId};
use crate::errors::Result;
use crate::goals::goals_model::GoalSource;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Determines the single authoritative goal for the user.
    async fn resolve_goal(&self, user: &UserId) -> Result<GoalSource>;

    /// Same as `resolve_goal` for callers that already hold the card list.
    async fn resolve_goal_with_cards(&self, user: &UserId, cards: &[Card]) -> Result<GoalSource>;

    /// Writes a new goal to whichever source is currently authoritative.
    async fn update_goal(&self, user: &UserId, goal: Decimal) -> Result<GoalSource>;
}
