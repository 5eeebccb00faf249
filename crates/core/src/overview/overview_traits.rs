use async_trait::async_trait;

use crate::backend::{Transaction, UserId};
use crate::errors::Result;
use crate::overview::overview_model::{FinancesOverview, GoalsOverview, HomeOverview};

#[async_trait]
pub trait OverviewServiceTrait: Send + Sync {
    async fn home(&self, user: &UserId) -> Result<HomeOverview>;
    async fn goals(&self, user: &UserId) -> Result<GoalsOverview>;
    async fn finances(&self, user: &UserId) -> Result<FinancesOverview>;
    async fn history(&self, user: &UserId) -> Result<Vec<Transaction>>;
}
