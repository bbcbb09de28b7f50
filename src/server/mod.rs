pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{LlmClient, OpenRouterClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;

pub async fn run(config: Config) -> Result<()> {
    let llm: Arc<dyn LlmClient> = Arc::new(OpenRouterClient::new(&config.llm)?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        llm,
    };
    let app = build_router(state);

    info!("Starting server on {}", addr);
    info!("Chat endpoint: http://{}/api/chat", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The bot client may be deployed anywhere, so CORS stays permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
