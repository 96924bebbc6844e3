//! StatusBadges server: live presence badges.
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use statusbadges_api::{AppState, build_app};
use statusbadges_core::config::AppConfig;
use statusbadges_core::error::AppError;
use statusbadges_realtime::RealtimeEngine;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STATUSBADGES_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StatusBadges v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 2: Presence store, ingestor, gateway ────────────────
    let realtime = RealtimeEngine::new();
    let tasks = realtime.start(&config.gateway, shutdown_rx);

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(AppState::new(config, realtime));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("StatusBadges listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Wait for background tasks ────────────────────────
    tracing::info!("Waiting for background tasks to complete...");

    if let Some(handle) = tasks.gateway {
        match tokio::time::timeout(grace, handle).await {
            Ok(Ok(Ok(()))) => {}
            Ok(Ok(Err(e))) => tracing::error!(error = %e, "Gateway client stopped with an error"),
            Ok(Err(e)) => tracing::error!(error = %e, "Gateway client task panicked"),
            Err(_) => tracing::warn!("Gateway client did not stop within the grace period"),
        }
    }
    if tokio::time::timeout(grace, tasks.ingestor).await.is_err() {
        tracing::warn!("Presence ingestor did not stop within the grace period");
    }

    tracing::info!("StatusBadges shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
