//! LCSC KiCad Exporter server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use lcsc_api::{AppState, build_app};
use lcsc_convert::{CommandConverter, ExportService};
use lcsc_core::config::{AppConfig, ENV_PREFIX};
use lcsc_core::error::AppError;
use lcsc_easyeda::EasyedaClient;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
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
    let env = std::env::var(format!("{ENV_PREFIX}_ENV"))
        .unwrap_or_else(|_| "development".to_string());
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
    tracing::info!("Starting LCSC KiCad Exporter v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Upstream lookup client ───────────────────────────
    let source = Arc::new(EasyedaClient::new(&config.upstream)?);
    tracing::info!(
        base_url = %config.upstream.base_url,
        timeout_seconds = config.upstream.timeout_seconds,
        "Upstream client ready"
    );

    // ── Step 2: Converter ────────────────────────────────────────
    let converter = CommandConverter::new(&config.converter);
    tokio::fs::create_dir_all(converter.scratch_root())
        .await
        .map_err(|e| {
            AppError::configuration(format!(
                "Failed to create scratch dir '{}': {}",
                converter.scratch_root().display(),
                e
            ))
        })?;
    tracing::info!(
        command = %config.converter.command,
        scratch = %converter.scratch_root().display(),
        "Converter ready"
    );

    // ── Step 3: Build and start HTTP server ──────────────────────
    let export_service = ExportService::new(source, Arc::new(converter));
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = config.bind_address();
    let app = build_app(AppState::new(config, export_service));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("LCSC KiCad Exporter listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining in-flight requests...");
        let _ = shutdown_tx.send(true);
    });

    let server = tokio::spawn(async move { server.await });
    let _ = shutdown_rx.changed().await;

    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Server shut down gracefully"),
        Ok(Ok(Err(e))) => return Err(AppError::internal(format!("Server error: {}", e))),
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {}", e))),
        Err(_) => tracing::warn!("Graceful shutdown timed out after {}s", grace.as_secs()),
    }

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
