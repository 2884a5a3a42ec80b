use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menugen_api::config::ServerConfig;
use menugen_api::router::build_app_router;
use menugen_api::sessions::{run_eviction, SessionStore};
use menugen_api::state::AppState;
use menugen_provider::api::FalClient;
use menugen_provider::config::FalConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menugen_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- AI provider ---
    let fal_config = FalConfig::from_env();
    if fal_config.api_key.is_none() {
        tracing::warn!("FAL_KEY is not set; provider calls will fail");
    }
    let provider = Arc::new(FalClient::new(fal_config));

    // --- Session store + eviction sweeper ---
    let sessions = Arc::new(SessionStore::new());
    let eviction_cancel = tokio_util::sync::CancellationToken::new();
    let eviction_handle = tokio::spawn(run_eviction(
        Arc::clone(&sessions),
        Duration::from_secs(config.session_ttl_secs),
        Duration::from_secs(config.session_sweep_interval_secs),
        eviction_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        sessions,
        provider,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    eviction_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), eviction_handle).await;
    tracing::info!("Session eviction sweeper stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
