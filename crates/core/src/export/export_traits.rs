use async_trait::async_trait;

use super::export_errors::BrowserError;
use super::export_model::{PdfArtifact, PdfOptions, Viewport};
use crate::errors::Result;
use crate::reports::ReportRequest;

/// Starts isolated browser instances. One instance per export, never shared.
#[async_trait]
pub trait BrowserEngine: Send + Sync {
    async fn launch(&self) -> std::result::Result<Box<dyn BrowserSession>, BrowserError>;
}

/// A running browser instance with a single page.
///
/// `close` must be safe to call after any other method failed.
#[async_trait]
pub trait BrowserSession: Send {
    async fn open_page(&mut self, viewport: Viewport) -> std::result::Result<(), BrowserError>;

    /// Loads `url` and returns the HTTP status of the main document when known.
    async fn navigate(&mut self, url: &str) -> std::result::Result<Option<u16>, BrowserError>;

    /// Current `document.body.scrollHeight` in CSS pixels.
    async fn content_height(&mut self) -> std::result::Result<f64, BrowserError>;

    async fn print_pdf(&mut self, options: &PdfOptions)
        -> std::result::Result<Vec<u8>, BrowserError>;

    async fn close(&mut self) -> std::result::Result<(), BrowserError>;
}

#[async_trait]
pub trait PdfExportServiceTrait: Send + Sync {
    async fn export_pdf(&self, request: &ReportRequest) -> Result<PdfArtifact>;
}
