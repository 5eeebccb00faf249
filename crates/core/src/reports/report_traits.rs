use async_trait::async_trait;

use crate::errors::Result;
use crate::reports::report_gate::ReportAccess;
use crate::reports::report_model::{Report, ReportRequest};

#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    /// Assembles the report; callers must have passed the gate first.
    async fn compile_report(&self, access: &ReportAccess, request: &ReportRequest)
        -> Result<Report>;
}
