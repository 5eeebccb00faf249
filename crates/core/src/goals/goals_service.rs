use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::backend::{BackendClientTrait, Card, SurveyResponse, UserId};
use crate::errors::{Error, Result};
use crate::goals::goals_model::GoalSource;
use crate::goals::goals_traits::GoalServiceTrait;
use crate::utils::decimal_format::parse_decimal;

pub struct GoalService {
    backend: Arc<dyn BackendClientTrait>,
}

impl GoalService {
    pub fn new(backend: Arc<dyn BackendClientTrait>) -> Self {
        GoalService { backend }
    }

    /// Goal of the most recently added card, if any.
    fn goal_from_cards(cards: &[Card]) -> Option<GoalSource> {
        cards.last().map(|card| GoalSource::FromCard {
            card_id: card.id_string(),
            value: card.goal,
        })
    }

    /// Last answer of the first respondent; the onboarding form puts the goal last.
    fn goal_from_survey(responses: &[SurveyResponse]) -> GoalSource {
        let Some(answer) = responses.first().and_then(|r| r.answers.last()) else {
            return GoalSource::Unset;
        };
        match answer.answer_text().as_deref().and_then(parse_decimal) {
            Some(value) => GoalSource::FromSurvey { value },
            None => {
                warn!("Survey goal answer is not numeric: {:?}", answer.answer);
                GoalSource::Unset
            }
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn resolve_goal(&self, user: &UserId) -> Result<GoalSource> {
        let cards = self.backend.get_cards(user).await?;
        self.resolve_goal_with_cards(user, &cards).await
    }

    async fn resolve_goal_with_cards(&self, user: &UserId, cards: &[Card]) -> Result<GoalSource> {
        if let Some(source) = Self::goal_from_cards(cards) {
            return Ok(source);
        }
        let responses = self.backend.get_survey_responses(user).await?;
        let source = Self::goal_from_survey(&responses);
        if source.is_degraded() {
            warn!("No goal source available for user {}", user);
        }
        Ok(source)
    }

    async fn update_goal(&self, user: &UserId, goal: Decimal) -> Result<GoalSource> {
        if goal.is_sign_negative() {
            return Err(Error::Validation("Goal cannot be negative".to_string()));
        }
        let updated = match self.resolve_goal(user).await? {
            GoalSource::FromCard { card_id, .. } => {
                debug!("Updating goal on card {} for user {}", card_id, user);
                self.backend.update_card_goal(&card_id, goal).await?;
                GoalSource::FromCard {
                    card_id,
                    value: goal,
                }
            }
            GoalSource::FromSurvey { .. } | GoalSource::Unset => {
                debug!("Updating survey goal for user {}", user);
                self.backend.update_survey_goal(user, goal).await?;
                GoalSource::FromSurvey { value: goal }
            }
        };
        Ok(updated)
    }
}
