use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use crate::backend::{BackendClientTrait, Transaction};
use crate::budget::sum_amounts;
use crate::errors::{Error, Result};
use crate::reports::report_gate::ReportAccess;
use crate::reports::report_model::{DateRange, Report, ReportRequest, TOP_EXPENSES};
use crate::reports::report_traits::ReportServiceTrait;

pub struct ReportService {
    backend: Arc<dyn BackendClientTrait>,
}

impl ReportService {
    pub fn new(backend: Arc<dyn BackendClientTrait>) -> Self {
        ReportService { backend }
    }

    fn parse_dates(transactions: &[Transaction]) -> Result<Vec<NaiveDate>> {
        transactions
            .iter()
            .map(|t| {
                t.parsed_date().ok_or_else(|| {
                    Error::invalid_data(format!(
                        "transaction at '{}' has unreadable date '{}'",
                        t.establishment, t.date
                    ))
                })
            })
            .collect()
    }

    fn top_expenses(transactions: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted.truncate(TOP_EXPENSES);
        sorted
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn compile_report(
        &self,
        _access: &ReportAccess,
        request: &ReportRequest,
    ) -> Result<Report> {
        let (profile, transactions) = futures::try_join!(
            self.backend.get_user_profile(&request.user),
            self.backend.get_transactions(&request.user, &request.filter),
        )?;
        debug!(
            "Compiling report for user {} over {} transactions",
            request.user,
            transactions.len()
        );

        if transactions.is_empty() {
            return Err(Error::NoTransactions);
        }
        let dates = Self::parse_dates(&transactions)?;
        let period = DateRange::covering(dates).ok_or(Error::NoTransactions)?;
        let top_expenses = Self::top_expenses(&transactions);
        let total_spend = sum_amounts(&transactions)?;

        Ok(Report {
            first_name: profile.first_name,
            last_name: profile.last_name,
            period,
            top_expenses,
            transactions,
            total_spend,
        })
    }
}
