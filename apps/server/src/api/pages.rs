use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::{error::ApiResult, main_lib::AppState, session::Session, views};

async fn home(session: Session, State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let overview = state.overview_service.home(&session.user).await?;
    Ok(Html(views::render_home(
        &overview,
        session.username.as_deref(),
    )))
}

async fn finances(
    session: Session,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Html<String>> {
    let overview = state.overview_service.finances(&session.user).await?;
    Ok(Html(views::render_finances(
        &overview,
        &session.user,
        session.username.as_deref(),
    )))
}

async fn history(
    session: Session,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Html<String>> {
    let transactions = state.overview_service.history(&session.user).await?;
    Ok(Html(views::render_history(
        &transactions,
        session.username.as_deref(),
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/inicio", get(home))
        .route("/financas", get(finances))
        .route("/historico", get(history))
}
