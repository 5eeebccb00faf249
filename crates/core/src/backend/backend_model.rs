//! Backend domain records.
//!
//! Field names follow the backend's JSON (Portuguese) through serde renames;
//! the Rust side uses English names.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_format::deserialize_decimal;
use crate::utils::time_utils::parse_br_date;

/// Opaque user identifier established by the login step (the `idUser` cookie).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single spending record. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "estabelecimento")]
    pub establishment: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "valor", deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// `dd/mm/yyyy`
    #[serde(rename = "data")]
    pub date: String,
}

impl Transaction {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_br_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "idCartao")]
    pub id: serde_json::Value,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "numero", default)]
    pub number: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "meta", deserialize_with = "deserialize_decimal")]
    pub goal: Decimal,
}

impl Card {
    /// Card id as sent back to the backend; numeric and string ids are both accepted.
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAnswer {
    #[serde(rename = "pergunta")]
    pub question: serde_json::Value,
    #[serde(rename = "resposta")]
    pub answer: serde_json::Value,
}

impl SurveyAnswer {
    /// The answer as text, whatever JSON scalar the form produced.
    pub fn answer_text(&self) -> Option<String> {
        match &self.answer {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One respondent's onboarding answers, in question order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(rename = "resposta", default)]
    pub answers: Vec<SurveyAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome", default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    #[serde(rename = "total_gasto", deserialize_with = "deserialize_decimal")]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSpending {
    #[serde(rename = "pendente", deserialize_with = "deserialize_decimal")]
    pub pending: Decimal,
}

/// Optional month/category narrowing for transaction queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub month: Option<String>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn new(month: Option<String>, category: Option<String>) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            month: clean(month),
            category: clean(category),
        }
    }
}
