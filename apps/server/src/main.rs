use patocash_server::{api::app_router, build_state, config::Config, init_tracing, scheduler};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();
    let state = build_state(&config).await?;

    if let Some(period) = config.report_token_rotation {
        scheduler::start_report_token_rotation(state.clone(), period);
    }

    let router = app_router(state, &config).fallback_service(ServeDir::new(&config.static_dir));
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
