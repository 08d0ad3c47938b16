//! Lexi study server.

use lexi_api::{
    ApiConfig, ApiState,
    metrics::{self, init_metrics},
    middleware::cors::create_cors_layer,
    tracing::init_tracing,
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);

    let metrics_handle = init_metrics()?;
    let state = ApiState::new(&config)?;

    let app = lexi_api::router::router()
        .with_state(state)
        .merge(metrics::routes(metrics_handle))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.allowed_origins));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, env = ?config.env, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
