use std::time::Duration;

use thiserror::Error;

use super::export_model::ExportStage;

/// Failures reported by a browser engine implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("launch failed: {0}")]
    Launch(String),
    #[error("page setup failed: {0}")]
    Page(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("script evaluation failed: {0}")]
    Script(String),
    #[error("printing failed: {0}")]
    Print(String),
    #[error("shutdown failed: {0}")]
    Close(String),
}

/// Why an export produced no artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Browser engine could not be launched: {0}")]
    BrowserLaunchFailure(String),

    #[error("Report rendering timed out after {after:?} while {stage}")]
    RenderTimeout { stage: ExportStage, after: Duration },

    /// The gated report view itself failed after the browser reached it.
    #[error("Report view failed: {0}")]
    UpstreamReportError(String),

    #[error("Browser engine error while {stage}: {message}")]
    Engine { stage: ExportStage, message: String },
}

impl ExportError {
    pub fn engine(stage: ExportStage, err: impl ToString) -> Self {
        Self::Engine {
            stage,
            message: err.to_string(),
        }
    }
}
