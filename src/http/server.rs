//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::keepalive::{self, ProberHandle, SELF_PING_URL};

use super::shutdown;

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Failed to build keep-alive probe client: {0}")]
    ProbeClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind the listener, start the keep-alive prober when in production, and
/// serve until a termination signal arrives.
///
/// This function blocks until the server shuts down. Ordering guarantee:
/// the socket is bound and the startup line logged before the prober is
/// scheduled.
pub async fn start_server(app: Router, config: &Config) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        port = config.port,
        environment = %config.node_env,
        "Server is running"
    );

    let prober = spawn_prober(config)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal(prober))
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Start the keep-alive prober, production only.
///
/// Outside production no handle is ever created and shutdown has nothing
/// prober-related to do.
fn spawn_prober(config: &Config) -> Result<Option<ProberHandle>, reqwest::Error> {
    if !config.is_production() {
        return Ok(None);
    }

    let handle = keepalive::spawn(SELF_PING_URL)?;
    tracing::info!(
        url = SELF_PING_URL,
        interval_secs = keepalive::PROBE_INTERVAL.as_secs(),
        "Keep-alive prober started"
    );
    Ok(Some(handle))
}
