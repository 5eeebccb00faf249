use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use tokio::time::{timeout_at, Instant};

use super::export_errors::{BrowserError, ExportError};
use super::export_model::{ExportSettings, ExportStage, PdfArtifact};
use super::export_traits::{BrowserEngine, BrowserSession, PdfExportServiceTrait};
use crate::errors::Result;
use crate::reports::{ReportGate, ReportRequest};

/// Drives a browser through the gated report view and prints it.
pub struct PdfExportService {
    engine: Arc<dyn BrowserEngine>,
    gate: Arc<ReportGate>,
    settings: ExportSettings,
}

impl PdfExportService {
    pub fn new(
        engine: Arc<dyn BrowserEngine>,
        gate: Arc<ReportGate>,
        settings: ExportSettings,
    ) -> Self {
        PdfExportService {
            engine,
            gate,
            settings,
        }
    }

    /// Runs one stage against the shared deadline.
    async fn stage<T, F>(
        &self,
        deadline: Instant,
        stage: ExportStage,
        fut: F,
    ) -> std::result::Result<T, ExportError>
    where
        F: Future<Output = std::result::Result<T, BrowserError>>,
    {
        debug!("PDF export stage: {}", stage);
        match timeout_at(deadline, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(ExportError::engine(stage, err)),
            Err(_) => Err(ExportError::RenderTimeout {
                stage,
                after: self.settings.timeout,
            }),
        }
    }

    async fn capture(
        &self,
        session: &mut dyn BrowserSession,
        request: &ReportRequest,
        deadline: Instant,
    ) -> std::result::Result<PdfArtifact, ExportError> {
        let viewport = self.settings.viewport;
        let status = self
            .stage(deadline, ExportStage::NavigatingToReport, async {
                session.open_page(viewport).await?;
                // Read the token only now so a rotation since launch is observed.
                let url = self.settings.report_url(request, &self.gate.current_token());
                session.navigate(&url).await
            })
            .await?;
        if let Some(code) = status.filter(|code| !(200..300).contains(code)) {
            return Err(ExportError::UpstreamReportError(format!(
                "report view answered with status {}",
                code
            )));
        }

        let min_height = self.settings.min_content_height;
        let poll = self.settings.poll_interval;
        self.stage(deadline, ExportStage::WaitingForLayout, async {
            loop {
                let height = session.content_height().await?;
                if height > min_height {
                    debug!("Report laid out at {}px", height);
                    return Ok::<(), BrowserError>(());
                }
                tokio::time::sleep(poll).await;
            }
        })
        .await?;

        let options = self.settings.pdf;
        let bytes = self
            .stage(deadline, ExportStage::Capturing, session.print_pdf(&options))
            .await?;
        PdfArtifact::from_bytes(bytes).ok_or_else(|| {
            ExportError::engine(ExportStage::Capturing, "engine returned a non-PDF buffer")
        })
    }

    async fn run(&self, request: &ReportRequest) -> std::result::Result<PdfArtifact, ExportError> {
        let deadline = Instant::now() + self.settings.timeout;

        debug!("PDF export stage: {}", ExportStage::LaunchingEngine);
        let mut session = match timeout_at(deadline, self.engine.launch()).await {
            Ok(Ok(session)) => session,
            Ok(Err(err)) => return Err(ExportError::BrowserLaunchFailure(err.to_string())),
            Err(_) => {
                return Err(ExportError::BrowserLaunchFailure(format!(
                    "engine did not start within {:?}",
                    self.settings.timeout
                )))
            }
        };

        let outcome = self.capture(session.as_mut(), request, deadline).await;

        // Teardown runs on every path once an engine exists.
        if let Err(err) = session.close().await {
            warn!("Browser engine did not shut down cleanly: {}", err);
        }
        debug!("PDF export stage: {}", ExportStage::Closed);
        outcome
    }
}

#[async_trait]
impl PdfExportServiceTrait for PdfExportService {
    async fn export_pdf(&self, request: &ReportRequest) -> Result<PdfArtifact> {
        match self.run(request).await {
            Ok(artifact) => {
                info!(
                    "Exported PDF report for user {} ({} bytes)",
                    request.user,
                    artifact.len()
                );
                Ok(artifact)
            }
            Err(err) => {
                error!("PDF export for user {} failed: {}", request.user, err);
                Err(err.into())
            }
        }
    }
}
