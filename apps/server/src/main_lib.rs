use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use patocash_backend_client::BackendClient;
use patocash_browser::{ChromiumConfig, ChromiumEngine};
use patocash_core::{
    backend::BackendClientTrait,
    export::{BrowserEngine, ExportSettings, PdfExportService, PdfExportServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    overview::{OverviewService, OverviewServiceTrait},
    reports::{ReportGate, ReportService, ReportServiceTrait},
};

use crate::config::Config;

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub overview_service: Arc<dyn OverviewServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub export_service: Arc<dyn PdfExportServiceTrait>,
    pub report_gate: Arc<ReportGate>,
}

impl AppState {
    /// Wires every service on top of one backend client and one browser engine.
    pub fn new(
        backend: Arc<dyn BackendClientTrait>,
        engine: Arc<dyn BrowserEngine>,
        report_gate: Arc<ReportGate>,
        export_settings: ExportSettings,
    ) -> Self {
        let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(backend.clone()));
        let overview_service = Arc::new(OverviewService::new(backend.clone(), goal_service.clone()));
        let report_service = Arc::new(ReportService::new(backend));
        let export_service = Arc::new(PdfExportService::new(
            engine,
            report_gate.clone(),
            export_settings,
        ));

        Self {
            goal_service,
            overview_service,
            report_service,
            export_service,
            report_gate,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("PATOCASH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Fresh random secret for the report gate.
pub fn generate_report_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Data service at {}", config.backend_url);
    let backend = Arc::new(BackendClient::new(
        &config.backend_url,
        config.backend_timeout,
    )?);

    let engine = Arc::new(ChromiumEngine::new(ChromiumConfig {
        executable: config.chrome_path.clone(),
        sandbox: config.chrome_sandbox,
    }));
    if !config.chrome_sandbox {
        tracing::warn!("Chromium sandbox disabled");
    }

    let token = match &config.report_token {
        Some(token) => token.clone(),
        None => {
            tracing::info!("PATOCASH_REPORT_TOKEN not set; using an ephemeral report token");
            generate_report_token()
        }
    };
    let report_gate = Arc::new(ReportGate::new(token));

    let export_settings =
        ExportSettings::new(&config.report_base_url)?.with_timeout(config.export_timeout);
    if config.request_timeout <= config.export_timeout {
        tracing::warn!(
            "Request timeout ({:?}) does not exceed the export timeout ({:?})",
            config.request_timeout,
            config.export_timeout
        );
    }

    Ok(Arc::new(AppState::new(
        backend,
        engine,
        report_gate,
        export_settings,
    )))
}
