//! Leaseify API server entry point.

use leaseify_api::{create_app, ApiConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    let bind_addr = config.bind_addr;
    tracing::info!(%bind_addr, mode = ?config.mode, "starting leaseify-api");

    let app = create_app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await
}
