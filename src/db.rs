//! Database connection bootstrap.
//!
//! The pool is established before the listener is bound; a connection
//! failure aborts startup so the service never serves traffic with a dead
//! store behind it.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Upper bound on pooled connections shared across all route groups.
pub const MAX_CONNECTIONS: u32 = 10;

/// How long to wait for the initial handshake before giving up.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to the database named by `DATABASE_URL`.
///
/// Verifies the handshake by acquiring a connection, so the returned pool is
/// known-good at startup.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect(&config.database_url)
        .await?;

    tracing::info!(max_connections = MAX_CONNECTIONS, "Connected to database");
    Ok(pool)
}
