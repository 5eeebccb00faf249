use std::sync::Arc;

use axum::Router;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub mod goals;
pub mod health;
pub mod pages;
pub mod report;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .merge(goals::router())
        .merge(report::router())
        .with_state(state)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
