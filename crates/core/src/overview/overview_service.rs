use std::sync::Arc;

use async_trait::async_trait;

use crate::backend::{BackendClientTrait, Transaction, TransactionFilter, UserId};
use crate::budget::{aggregate, aggregate_totals, checked_total, round_money, sum_amounts};
use crate::errors::Result;
use crate::goals::GoalServiceTrait;
use crate::overview::overview_model::{
    CategoryTotal, FinancesOverview, GoalsOverview, HomeOverview, FEATURED_CARDS,
};
use crate::overview::overview_traits::OverviewServiceTrait;

pub struct OverviewService {
    backend: Arc<dyn BackendClientTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
}

impl OverviewService {
    pub fn new(
        backend: Arc<dyn BackendClientTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        OverviewService {
            backend,
            goal_service,
        }
    }
}

#[async_trait]
impl OverviewServiceTrait for OverviewService {
    async fn home(&self, user: &UserId) -> Result<HomeOverview> {
        let unfiltered = TransactionFilter::default();
        let (transactions, cards) = futures::try_join!(
            self.backend.get_transactions(user, &unfiltered),
            self.backend.get_cards(user),
        )?;
        let goal = self
            .goal_service
            .resolve_goal_with_cards(user, &cards)
            .await?;
        let budget = aggregate(&transactions, &goal)?;

        Ok(HomeOverview {
            card_count: cards.len(),
            featured_cards: cards.into_iter().take(FEATURED_CARDS).collect(),
            transactions,
            goal,
            budget,
        })
    }

    async fn goals(&self, user: &UserId) -> Result<GoalsOverview> {
        let (cards, spending) = futures::try_join!(
            self.backend.get_cards(user),
            self.backend.get_category_spending(user),
        )?;
        let goal = self
            .goal_service
            .resolve_goal_with_cards(user, &cards)
            .await?;

        let categories: Vec<CategoryTotal> = spending
            .into_iter()
            .map(|(category, s)| CategoryTotal {
                category,
                total: s.total,
            })
            .collect();
        let total = checked_total(categories.iter().map(|c| c.total))?;
        let budget = aggregate_totals(total, &goal)?;

        Ok(GoalsOverview {
            categories,
            goal,
            budget,
        })
    }

    async fn finances(&self, user: &UserId) -> Result<FinancesOverview> {
        let unfiltered = TransactionFilter::default();
        let (transactions, pending, categories, months) = futures::try_join!(
            self.backend.get_transactions(user, &unfiltered),
            self.backend.get_pending_spending(user),
            self.backend.get_categories(user),
            self.backend.get_transaction_months(user),
        )?;

        Ok(FinancesOverview {
            total_spend: sum_amounts(&transactions)?,
            pending: round_money(pending.pending),
            transactions,
            categories,
            months,
        })
    }

    async fn history(&self, user: &UserId) -> Result<Vec<Transaction>> {
        self.backend
            .get_transactions(user, &TransactionFilter::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CategorySpending;
    use crate::errors::Error;
    use crate::goals::{GoalService, GoalSource};
    use crate::testing::{card, survey, tx, MockBackend};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn service(backend: Arc<MockBackend>) -> OverviewService {
        let goals = Arc::new(GoalService::new(backend.clone()));
        OverviewService::new(backend, goals)
    }

    #[tokio::test]
    async fn home_uses_card_goal_without_touching_survey() {
        let backend = Arc::new(MockBackend {
            transactions: vec![
                tx("Mercado", "Alimentação", dec!(60), "01/03/2024"),
                tx("Bar", "Lazer", dec!(90), "02/03/2024"),
            ],
            cards: vec![card("1", dec!(500)), card("2", dec!(100)), card("3", dec!(100))],
            ..Default::default()
        });

        let home = service(backend.clone())
            .home(&UserId::new("u"))
            .await
            .unwrap();

        assert_eq!(home.card_count, 3);
        assert_eq!(home.featured_cards.len(), 2);
        assert_eq!(home.budget.total_spend, dec!(150));
        assert_eq!(home.budget.spend_percentage, dec!(100));
        assert_eq!(home.budget.remaining_budget, dec!(-50));
        assert_eq!(backend.calls("get_cards"), 1);
        assert_eq!(backend.calls("get_survey_responses"), 0);
    }

    #[tokio::test]
    async fn home_falls_back_to_survey() {
        let backend = Arc::new(MockBackend {
            transactions: vec![tx("Mercado", "Alimentação", dec!(25), "01/03/2024")],
            surveys: vec![survey(&["sim", "100"])],
            ..Default::default()
        });

        let home = service(backend).home(&UserId::new("u")).await.unwrap();

        assert_eq!(home.goal, GoalSource::FromSurvey { value: dec!(100) });
        assert_eq!(home.budget.spend_percentage, dec!(25));
        assert!(home.featured_cards.is_empty());
    }

    #[tokio::test]
    async fn goals_sums_category_totals() {
        let mut spending = BTreeMap::new();
        spending.insert("Lazer".to_string(), CategorySpending { total: dec!(40.25) });
        spending.insert("Saúde".to_string(), CategorySpending { total: dec!(59.75) });
        let backend = Arc::new(MockBackend {
            cards: vec![card("9", dec!(400))],
            category_spending: spending,
            ..Default::default()
        });

        let goals = service(backend).goals(&UserId::new("u")).await.unwrap();

        assert_eq!(goals.categories.len(), 2);
        assert_eq!(goals.budget.total_spend, dec!(100.00));
        assert_eq!(goals.budget.remaining_budget, dec!(300.00));
        assert_eq!(goals.budget.spend_percentage, dec!(25));
    }

    #[tokio::test]
    async fn overflowing_category_totals_are_invalid_data() {
        let huge = Decimal::from_scientific("5e28").unwrap();
        let mut spending = BTreeMap::new();
        spending.insert("Lazer".to_string(), CategorySpending { total: huge });
        spending.insert("Saúde".to_string(), CategorySpending { total: huge });
        let backend = Arc::new(MockBackend {
            cards: vec![card("9", dec!(400))],
            category_spending: spending,
            ..Default::default()
        });

        let err = service(backend).goals(&UserId::new("u")).await.unwrap_err();

        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[tokio::test]
    async fn goals_without_any_source_is_degraded() {
        let backend = Arc::new(MockBackend::default());
        let goals = service(backend).goals(&UserId::new("u")).await.unwrap();
        assert!(goals.budget.goal_unset);
        assert_eq!(goals.budget.spend_percentage, Decimal::ZERO);
    }

    #[tokio::test]
    async fn finances_joins_four_reads() {
        let backend = Arc::new(MockBackend {
            transactions: vec![
                tx("A", "x", dec!(10.005), "01/01/2024"),
                tx("B", "y", dec!(5), "02/01/2024"),
            ],
            pending: dec!(33.333),
            categories: vec!["x".into(), "y".into()],
            months: vec!["01/2024".into()],
            ..Default::default()
        });

        let finances = service(backend.clone())
            .finances(&UserId::new("u"))
            .await
            .unwrap();

        assert_eq!(finances.total_spend, dec!(15.01));
        assert_eq!(finances.pending, dec!(33.33));
        assert_eq!(finances.categories.len(), 2);
        assert_eq!(backend.total_calls(), 4);
    }

    #[tokio::test]
    async fn finances_fails_when_any_read_fails() {
        let backend = Arc::new(MockBackend {
            fail: true,
            ..Default::default()
        });
        let err = service(backend)
            .finances(&UserId::new("u"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BackendUnavailable(_)));
    }
}
