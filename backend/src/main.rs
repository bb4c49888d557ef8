use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use people_backend::config::Config;
use people_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_logging(&config.log_level);

    let app_state = initialize_backend(
        &config.database_url,
        config.max_connections,
        &config.service_options(),
    )
    .await?;

    if config.seed_on_startup {
        info!("Loading seed data");
        app_state.reset_service.reset().await?;
    }

    let app = create_router(
        app_state,
        config.cors_origin.as_deref(),
        Some(config.frontend_dir.clone()),
    )?;

    info!("Starting server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
