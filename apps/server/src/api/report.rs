use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use patocash_core::{backend::UserId, reports::ReportRequest};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    views,
};

#[derive(Deserialize)]
struct ReportQuery {
    token: Option<String>,
    id: Option<String>,
    mes: Option<String>,
    categoria: Option<String>,
}

impl ReportQuery {
    fn into_request(self) -> ApiResult<ReportRequest> {
        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing user id".to_string()))?;
        Ok(ReportRequest::new(UserId::new(id), self.mes, self.categoria))
    }
}

/// Internal view rendered by the PDF exporter's browser.
async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Html<String>> {
    // Gate first: a rejected token must not cost a single backend call.
    let access = state.report_gate.verify(query.token.as_deref())?;
    let request = query.into_request()?;
    let report = state.report_service.compile_report(&access, &request).await?;
    Ok(Html(views::render_report(&report)))
}

async fn export_pdf(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Response> {
    let request = query.into_request()?;
    let artifact = state.export_service.export_pdf(&request).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"relatorio.pdf\""),
        ],
        artifact.into_bytes(),
    )
        .into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/relatorio", get(get_report))
        .route("/exportar-pdf", get(export_pdf))
}
