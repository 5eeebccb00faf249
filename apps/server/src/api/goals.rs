use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use patocash_core::utils::decimal_format::parse_decimal;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    session::Session,
    views,
};

#[derive(Deserialize)]
struct GoalForm {
    meta: String,
}

async fn get_goals(
    session: Session,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Html<String>> {
    let overview = state.overview_service.goals(&session.user).await?;
    Ok(Html(views::render_goals(
        &overview,
        session.username.as_deref(),
    )))
}

async fn update_goal(
    session: Session,
    State(state): State<Arc<AppState>>,
    Form(form): Form<GoalForm>,
) -> ApiResult<Redirect> {
    let goal = parse_decimal(&form.meta)
        .ok_or_else(|| ApiError::BadRequest(format!("Meta inválida: '{}'", form.meta)))?;
    let source = state.goal_service.update_goal(&session.user, goal).await?;
    tracing::info!("Goal for user {} set to {} ({:?})", session.user, goal, source);
    Ok(Redirect::to("/metas"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metas", get(get_goals).post(update_goal))
}
