//! Report domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::backend::{Transaction, TransactionFilter, UserId};
use crate::utils::time_utils::format_br_date;

/// Number of largest expenses highlighted at the top of a report.
pub const TOP_EXPENSES: usize = 3;

/// Who and what a report (or its PDF export) covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub user: UserId,
    pub filter: TransactionFilter,
}

impl ReportRequest {
    pub fn new(user: UserId, month: Option<String>, category: Option<String>) -> Self {
        Self {
            user,
            filter: TransactionFilter::new(month, category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Smallest range covering every date; `None` for an empty input.
    pub fn covering<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |range, date| match range {
            None => Some(DateRange {
                start: date,
                end: date,
            }),
            Some(DateRange { start, end }) => Some(DateRange {
                start: start.min(date),
                end: end.max(date),
            }),
        })
    }

    pub fn start_label(&self) -> String {
        format_br_date(self.start)
    }

    pub fn end_label(&self) -> String {
        format_br_date(self.end)
    }
}

/// Compiled export document. Built per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub first_name: String,
    pub last_name: String,
    pub period: DateRange,
    /// Largest amounts first, at most `TOP_EXPENSES`.
    pub top_expenses: Vec<Transaction>,
    pub transactions: Vec<Transaction>,
    pub total_spend: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn covering_range_ignores_input_order() {
        let range =
            DateRange::covering(vec![d(2024, 1, 5), d(2024, 3, 20), d(2024, 2, 1)]).unwrap();
        assert_eq!(range.start_label(), "05/01/2024");
        assert_eq!(range.end_label(), "20/03/2024");
    }

    #[test]
    fn covering_empty_is_none() {
        assert!(DateRange::covering(Vec::new()).is_none());
    }
}
