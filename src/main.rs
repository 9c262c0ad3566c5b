//! Storefront server binary.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::{signal, task::JoinHandle};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{create_router, spawn_sweep_task, AppState, Config};

/// Main entry point for the storefront server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared response cache and catalog
/// 4. Start the background cache sweep
/// 5. Serve the router until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting storefront server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, sweep_interval={}ms, category_ttl={}ms, product_ttl={}ms",
        config.server_port,
        config.sweep_interval_ms,
        config.category_cache_ttl_ms,
        config.product_cache_ttl_ms
    );

    let state = AppState::from_config(&config);
    let sweep_handle = spawn_sweep_task(state.cache.clone(), config.sweep_interval_ms);
    info!("Cache sweep task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then stops the sweep task.
async fn shutdown_signal(sweep_handle: JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    sweep_handle.abort();
    warn!("Cache sweep task aborted");
}
