//! Graceful shutdown and signal handling.
//!
//! SIGINT (Ctrl+C) and SIGTERM both stop the prober schedule and let the
//! server drain. The future resolves once, so a second signal cannot
//! double-cancel. In-flight probes are neither awaited nor cancelled; they
//! finish or fail on their own while the process exits.

use crate::keepalive::ProberHandle;

/// Resolve when a termination signal is received, cancelling the prober
/// first if one was started.
///
/// Intended for `axum::serve(...).with_graceful_shutdown(...)`: once this
/// resolves the server stops accepting connections, drains, and the process
/// exits with a success status.
pub async fn shutdown_signal(prober: Option<ProberHandle>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    if let Some(prober) = prober {
        prober.cancel();
        tracing::info!("Keep-alive prober stopped");
    }
}
