//! Dog Breeds Server - Main entry point

use anyhow::{Context, Result};
use breeds_common::logging::{init_logging, LogConfig};
use std::time::Duration;
use tokio::signal;
use tracing::info;

use breeds_server::{api, config::Config, BreedStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::builder()
        .log_file_prefix("breeds-server".to_string())
        .filter_directives("breeds_server=debug,tower_http=debug,sqlx=warn".to_string())
        .build();

    // Merge with environment variables (they take precedence)
    let log_config = log_config.with_env()?;

    init_logging(&log_config)?;

    info!("Starting Dog Breeds API");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    // Open the database and bring it up to date
    let store = BreedStore::open(&config.database)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    store.migrate().await.context("Failed to run migrations")?;

    if store.seed_if_empty().await? {
        info!("Database seeded with starter breeds");
    }

    // Build the application router
    let app = api::create_router(store.clone(), &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    info!("API documentation available at http://{}/api-docs.json", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    store.close().await;
    info!("Server shut down gracefully");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    // Give in-flight requests a moment before the listener stops
    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(2))).await;
}
