//! Rainfall Advisor - Backend Server

use std::{path::Path, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rainfall_advisor::{
    config::Config, create_app, external::GeminiClient, services::SimulatedPredictor, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rainfall_advisor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing API key must stop the server from starting
    let config = Config::load().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    tracing::info!("Starting Rainfall Advisor");
    tracing::info!("Environment: {}", config.environment);

    let gemini = GeminiClient::from_config(&config.gemini)?;
    tracing::info!("Using model {}", gemini.model());

    let state = AppState::new(Arc::new(gemini), Arc::new(SimulatedPredictor));

    let static_dir = config.server.static_dir.as_deref().map(Path::new);
    if let Some(dir) = static_dir {
        tracing::info!("Serving static files from {}", dir.display());
    }

    // Build application
    let app = create_app(state, static_dir);

    // Start server
    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
