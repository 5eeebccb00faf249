//! In-memory backend used by the unit tests of this crate.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::backend::{
    BackendClientTrait, Card, CategorySpending, PendingSpending, SurveyAnswer, SurveyResponse,
    Transaction, TransactionFilter, UserId, UserProfile,
};
use crate::errors::{Error, Result};

pub fn card(id: &str, goal: Decimal) -> Card {
    Card {
        id: serde_json::Value::String(id.to_string()),
        kind: "credito".to_string(),
        number: "0000".to_string(),
        name: format!("Cartao {}", id),
        goal,
    }
}

pub fn survey(answers: &[&str]) -> SurveyResponse {
    SurveyResponse {
        answers: answers
            .iter()
            .enumerate()
            .map(|(i, a)| SurveyAnswer {
                question: serde_json::json!(i + 1),
                answer: serde_json::json!(a),
            })
            .collect(),
    }
}

pub fn tx(establishment: &str, category: &str, amount: Decimal, date: &str) -> Transaction {
    Transaction {
        establishment: establishment.to_string(),
        category: category.to_string(),
        amount,
        date: date.to_string(),
    }
}

#[derive(Default)]
pub struct MockBackend {
    pub transactions: Vec<Transaction>,
    pub cards: Vec<Card>,
    pub surveys: Vec<SurveyResponse>,
    pub profile: Option<UserProfile>,
    pub category_spending: BTreeMap<String, CategorySpending>,
    pub pending: Decimal,
    pub categories: Vec<String>,
    pub months: Vec<String>,
    pub fail: bool,
    pub calls: Mutex<HashMap<&'static str, usize>>,
    pub filters: Mutex<Vec<TransactionFilter>>,
    pub card_updates: Mutex<Vec<(String, Decimal)>>,
    pub survey_updates: Mutex<Vec<Decimal>>,
}

impl MockBackend {
    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn last_filter(&self) -> Option<TransactionFilter> {
        self.filters.lock().unwrap().last().cloned()
    }

    pub fn card_goal_updates(&self) -> Vec<(String, Decimal)> {
        self.card_updates.lock().unwrap().clone()
    }

    pub fn survey_goal_updates(&self) -> Vec<Decimal> {
        self.survey_updates.lock().unwrap().clone()
    }

    fn hit(&self, op: &'static str) -> Result<()> {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
        if self.fail {
            return Err(Error::backend(format!("{} failed: connection refused", op)));
        }
        Ok(())
    }
}

#[async_trait]
impl BackendClientTrait for MockBackend {
    async fn get_transactions(
        &self,
        _user: &UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        self.hit("get_transactions")?;
        self.filters.lock().unwrap().push(filter.clone());
        Ok(self.transactions.clone())
    }

    async fn get_cards(&self, _user: &UserId) -> Result<Vec<Card>> {
        self.hit("get_cards")?;
        Ok(self.cards.clone())
    }

    async fn get_survey_responses(&self, _user: &UserId) -> Result<Vec<SurveyResponse>> {
        self.hit("get_survey_responses")?;
        Ok(self.surveys.clone())
    }

    async fn get_user_profile(&self, _user: &UserId) -> Result<UserProfile> {
        self.hit("get_user_profile")?;
        Ok(self.profile.clone().unwrap_or(UserProfile {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
        }))
    }

    async fn get_category_spending(
        &self,
        _user: &UserId,
    ) -> Result<BTreeMap<String, CategorySpending>> {
        self.hit("get_category_spending")?;
        Ok(self.category_spending.clone())
    }

    async fn get_pending_spending(&self, _user: &UserId) -> Result<PendingSpending> {
        self.hit("get_pending_spending")?;
        Ok(PendingSpending {
            pending: self.pending,
        })
    }

    async fn get_categories(&self, _user: &UserId) -> Result<Vec<String>> {
        self.hit("get_categories")?;
        Ok(self.categories.clone())
    }

    async fn get_transaction_months(&self, _user: &UserId) -> Result<Vec<String>> {
        self.hit("get_transaction_months")?;
        Ok(self.months.clone())
    }

    async fn update_card_goal(&self, card_id: &str, goal: Decimal) -> Result<()> {
        self.hit("update_card_goal")?;
        self.card_updates
            .lock()
            .unwrap()
            .push((card_id.to_string(), goal));
        Ok(())
    }

    async fn update_survey_goal(&self, _user: &UserId, goal: Decimal) -> Result<()> {
        self.hit("update_survey_goal")?;
        self.survey_updates.lock().unwrap().push(goal);
        Ok(())
    }
}
