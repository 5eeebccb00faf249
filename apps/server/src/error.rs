use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use patocash_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Body of every 403 from the report gate. Never says why the token failed.
pub const FORBIDDEN_BODY: &str = "Acesso negado";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// No `idUser` cookie; the browser is sent back to the login page.
    #[error("Not signed in")]
    Unauthenticated,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Unauthenticated => return Redirect::to("/").into_response(),
            ApiError::Core(CoreError::Forbidden) => {
                return (StatusCode::FORBIDDEN, FORBIDDEN_BODY).into_response()
            }
            ApiError::Core(e @ CoreError::Validation(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Core(e) => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
