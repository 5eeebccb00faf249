use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::backend_model::{
    Card, CategorySpending, PendingSpending, SurveyResponse, Transaction, TransactionFilter,
    UserId, UserProfile,
};
use crate::errors::Result;

/// Read/write contract of the remote data service.
///
/// Implementations surface every transport failure, non-success status or
/// undecodable body as `Error::BackendUnavailable`. Nothing is retried.
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    async fn get_transactions(
        &self,
        user: &UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>>;

    /// Cards in insertion order; the last one is the most recently added.
    async fn get_cards(&self, user: &UserId) -> Result<Vec<Card>>;

    async fn get_survey_responses(&self, user: &UserId) -> Result<Vec<SurveyResponse>>;

    async fn get_user_profile(&self, user: &UserId) -> Result<UserProfile>;

    async fn get_category_spending(
        &self,
        user: &UserId,
    ) -> Result<BTreeMap<String, CategorySpending>>;

    async fn get_pending_spending(&self, user: &UserId) -> Result<PendingSpending>;

    async fn get_categories(&self, user: &UserId) -> Result<Vec<String>>;

    async fn get_transaction_months(&self, user: &UserId) -> Result<Vec<String>>;

    async fn update_card_goal(&self, card_id: &str, goal: Decimal) -> Result<()>;

    async fn update_survey_goal(&self, user: &UserId, goal: Decimal) -> Result<()>;
}
