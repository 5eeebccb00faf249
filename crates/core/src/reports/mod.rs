//! Reports module - report compilation and the shared-secret gate in front of it.

mod report_gate;
mod report_model;
mod report_service;
mod report_traits;

pub use report_gate::{ReportAccess, ReportGate};
pub use report_model::{DateRange, Report, ReportRequest};
pub use report_service::ReportService;
pub use report_traits::ReportServiceTrait;
