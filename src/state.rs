//! Shared application state for request handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the application configuration and the database pool shared by all
/// route groups. The pool manages its own concurrency; handlers only borrow it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: PgPool,
}

impl AppState {
    /// Creates a new application state from the given configuration and pool.
    pub fn new(config: Config, db: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
