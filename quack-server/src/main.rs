//! Quack API Server - Main Entry Point

use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use quack_registry::Registry;
use quack_server::config::ServerConfig;
use quack_server::http::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Quack API server");
    info!("Configuration: {:?}", config);

    let time_zone = config.resolve_time_zone()?;
    info!(time_zone = time_zone.iana_name().unwrap_or("<unnamed>"), "Local time zone");

    let app_state = AppState::new(Arc::new(Registry::new()), time_zone);
    let router = quack_server::http::create_router(app_state);
    let http_addr = config.http_addr();

    info!("HTTP server listening on {}", http_addr);
    let listener = tokio::net::TcpListener::bind(http_addr).await?;

    // --- Graceful Shutdown ---
    let shutdown_signal = async {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("Shutdown signal received, starting graceful shutdown...");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
