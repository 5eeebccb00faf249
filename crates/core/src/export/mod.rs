//! Export module - HTML-to-PDF compilation of the gated report view.
//!
//! The pipeline is engine-agnostic: a `BrowserEngine` implementation (headless
//! Chromium in production) is injected into `PdfExportService`.

mod export_errors;
mod export_model;
mod export_service;
mod export_traits;

pub use export_errors::{BrowserError, ExportError};
pub use export_model::{ExportSettings, ExportStage, PdfArtifact, PdfOptions, Viewport};
pub use export_service::PdfExportService;
pub use export_traits::{BrowserEngine, BrowserSession, PdfExportServiceTrait};
