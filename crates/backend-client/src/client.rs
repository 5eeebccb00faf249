//! API client for the PatoCash data service.
//!
//! Endpoints carry the user id inside the path (`/cards/id=42`), mirroring the
//! data service's routing.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use patocash_core::backend::{
    BackendClientTrait, Card, CategorySpending, PendingSpending, SurveyResponse, Transaction,
    TransactionFilter, UserId, UserProfile,
};

use crate::error::{BackendClientError, Result};

#[derive(Serialize)]
struct CardGoalUpdate<'a> {
    #[serde(rename = "idCartao")]
    card_id: &'a str,
    #[serde(rename = "meta")]
    goal: Decimal,
}

#[derive(Serialize)]
struct SurveyGoalUpdate {
    #[serde(rename = "meta")]
    goal: Decimal,
}

/// Client for the data service REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root of the data service (e.g., "http://localhost:5000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_path(prefix: &str, user: &UserId) -> String {
        format!("{}/id={}", prefix, urlencoding::encode(user.as_str()))
    }

    /// Parse a JSON response body.
    async fn parse_response<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("{} responded {} ({} bytes)", endpoint, status, body.len());

        if !status.is_success() {
            return Err(BackendClientError::status(endpoint, status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to deserialize {} response: {}", endpoint, e);
            BackendClientError::decode(endpoint, e.to_string())
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        Self::parse_response(path, response).await
    }

    async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendClientError::status(path, status.as_u16(), message));
        }
        Ok(())
    }
}

#[async_trait]
impl BackendClientTrait for BackendClient {
    async fn get_transactions(
        &self,
        user: &UserId,
        filter: &TransactionFilter,
    ) -> patocash_core::Result<Vec<Transaction>> {
        let mut query = vec![("id", user.as_str())];
        if let Some(month) = filter.month.as_deref() {
            query.push(("mes", month));
        }
        if let Some(category) = filter.category.as_deref() {
            query.push(("categoria", category));
        }
        Ok(self.get_json("/transacao", &query).await?)
    }

    async fn get_cards(&self, user: &UserId) -> patocash_core::Result<Vec<Card>> {
        Ok(self.get_json(&Self::user_path("/cards", user), &[]).await?)
    }

    async fn get_survey_responses(
        &self,
        user: &UserId,
    ) -> patocash_core::Result<Vec<SurveyResponse>> {
        Ok(self
            .get_json(&Self::user_path("/respostas", user), &[])
            .await?)
    }

    async fn get_user_profile(&self, user: &UserId) -> patocash_core::Result<UserProfile> {
        Ok(self.get_json(&Self::user_path("/users", user), &[]).await?)
    }

    async fn get_category_spending(
        &self,
        user: &UserId,
    ) -> patocash_core::Result<BTreeMap<String, CategorySpending>> {
        Ok(self
            .get_json(&Self::user_path("/transacao_categoria", user), &[])
            .await?)
    }

    async fn get_pending_spending(&self, user: &UserId) -> patocash_core::Result<PendingSpending> {
        Ok(self
            .get_json(&Self::user_path("/transacao_next_transactions", user), &[])
            .await?)
    }

    async fn get_categories(&self, user: &UserId) -> patocash_core::Result<Vec<String>> {
        Ok(self
            .get_json(&Self::user_path("/get_categorias", user), &[])
            .await?)
    }

    async fn get_transaction_months(&self, user: &UserId) -> patocash_core::Result<Vec<String>> {
        Ok(self
            .get_json(&Self::user_path("/transacao_mes", user), &[])
            .await?)
    }

    async fn update_card_goal(&self, card_id: &str, goal: Decimal) -> patocash_core::Result<()> {
        let body = CardGoalUpdate { card_id, goal };
        Ok(self.put_json("/cards/update_meta", &body).await?)
    }

    async fn update_survey_goal(&self, user: &UserId, goal: Decimal) -> patocash_core::Result<()> {
        let body = SurveyGoalUpdate { goal };
        Ok(self
            .put_json(&Self::user_path("/respostas/update_meta", user), &body)
            .await?)
    }
}
