//! Lenient decimal parsing for backend payloads.
//!
//! The backend stores amounts and goals as whatever the form submitted, so the
//! same field may arrive as a JSON number (`12.5`) or a string (`"12.50"`).

use rust_decimal::Decimal;
use serde::{self, Deserialize, Deserializer};
use serde_json::Number;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalInput {
    String(String),
    Number(Number),
}

/// Parses a decimal from user or backend text, accepting a comma as decimal separator.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .or_else(|_| Decimal::from_str(&trimmed.replace(',', ".")))
        .ok()
}

pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = DecimalInput::deserialize(deserializer)?;
    let text = match raw {
        DecimalInput::String(s) => s,
        DecimalInput::Number(n) => n.to_string(),
    };
    parse_decimal(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("Invalid decimal value '{}'", text)))
}
