use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{Error, Result};
use crate::reports::ReportRequest;

/// Default bound for navigation, layout and capture together.
pub const DEFAULT_EXPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// Rendered height (px) below which the page is treated as still loading.
pub const MIN_CONTENT_HEIGHT: f64 = 1000.0;

const LAYOUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Pipeline progress. Every export that launched an engine ends in `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStage {
    Idle,
    LaunchingEngine,
    NavigatingToReport,
    WaitingForLayout,
    Capturing,
    Closed,
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportStage::Idle => "idle",
            ExportStage::LaunchingEngine => "launching engine",
            ExportStage::NavigatingToReport => "navigating to report",
            ExportStage::WaitingForLayout => "waiting for layout",
            ExportStage::Capturing => "capturing",
            ExportStage::Closed => "closed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    /// Tall enough that the report is laid out in one pass.
    fn default() -> Self {
        Self {
            width: 1200,
            height: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfOptions {
    /// Inches.
    pub paper_width: f64,
    /// Inches.
    pub paper_height: f64,
    pub print_background: bool,
    pub display_header_footer: bool,
    pub prefer_css_page_size: bool,
}

impl PdfOptions {
    pub fn a4() -> Self {
        Self {
            paper_width: 8.27,
            paper_height: 11.69,
            print_background: true,
            display_header_footer: false,
            prefer_css_page_size: false,
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self::a4()
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub report_base_url: Url,
    pub timeout: Duration,
    pub viewport: Viewport,
    pub min_content_height: f64,
    pub poll_interval: Duration,
    pub pdf: PdfOptions,
}

impl ExportSettings {
    pub fn new(report_base_url: &str) -> Result<Self> {
        let report_base_url = Url::parse(report_base_url).map_err(|e| {
            Error::Validation(format!("Invalid report base URL '{}': {}", report_base_url, e))
        })?;
        Ok(Self {
            report_base_url,
            timeout: DEFAULT_EXPORT_TIMEOUT,
            viewport: Viewport::default(),
            min_content_height: MIN_CONTENT_HEIGHT,
            poll_interval: LAYOUT_POLL_INTERVAL,
            pdf: PdfOptions::a4(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loopback URL of the gated report view for this request.
    pub fn report_url(&self, request: &ReportRequest, token: &str) -> String {
        let mut url = self.report_base_url.clone();
        let path = format!("{}/relatorio", url.path().trim_end_matches('/'));
        url.set_path(&path);
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("token", token);
            query.append_pair("id", request.user.as_str());
            if let Some(month) = &request.filter.month {
                query.append_pair("mes", month);
            }
            if let Some(category) = &request.filter.category {
                query.append_pair("categoria", category);
            }
        }
        url.to_string()
    }
}

/// A complete PDF document. Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfArtifact {
    bytes: Vec<u8>,
}

impl PdfArtifact {
    const MAGIC: &'static [u8] = b"%PDF-";

    /// Accepts only buffers that carry a PDF header.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        bytes.starts_with(Self::MAGIC).then_some(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
