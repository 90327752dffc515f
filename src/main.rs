//! Weather Hub - a lightweight weather service
//!
//! Serves current conditions for random cities from two upstream providers
//! through a stale-tolerant TTL cache.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod providers;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::{spawn_preload, spawn_sweeper, SweeperHandle};

/// Main entry point for the weather service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create application state with one cache per provider
/// 4. Start the background sweepers and the cache warm-up task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_hub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Weather Hub");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, weather_ttl={}s, accuweather_ttl={}s, retention={}s, sweep_interval={}s",
        config.server_port,
        config.weather_ttl_secs,
        config.accuweather_ttl_secs,
        config.retention_secs,
        config.sweep_interval_secs
    );
    if config.accuweather_api_key.is_none() {
        warn!("ACCUWEATHER_API_KEY is not set; /accuweather endpoints will fail");
    }

    // Create application state with both provider caches
    let state = AppState::from_config(&config);
    info!("Caches initialized");

    // Start one background sweeper per cache
    let sweepers = vec![
        spawn_sweeper(state.weather_cache.clone(), config.sweep_interval()),
        spawn_sweeper(state.accu_cache.clone(), config.sweep_interval()),
    ];
    info!("Background sweepers started");

    // Best-effort cache warm-up with one random city
    spawn_preload(state.clone());

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweepers))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, stops the sweepers and allows graceful shutdown.
async fn shutdown_signal(sweepers: Vec<SweeperHandle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    // Stop the background sweepers
    for sweeper in &sweepers {
        sweeper.shutdown();
    }
    warn!("Sweepers stopped");
}
