//! Configuration loading and constants.
//!
//! Configuration comes from environment variables (a `.env` file is read
//! first if present), deserialized into [`Config`]. Service-wide constants
//! live here as well so they have a single home.

use serde::Deserialize;

/// Service name reported by `GET /` and `GET /health`.
pub const SERVICE_NAME: &str = "Supply Chain API";

/// The `NODE_ENV` value that activates production-only behavior.
pub const PRODUCTION_ENV: &str = "production";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "supplychain_api=info,tower_http=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listen port (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Runtime environment (`NODE_ENV`); `"production"` enables the
    /// keep-alive prober.
    #[serde(default = "default_node_env")]
    pub node_env: String,

    /// Postgres connection string (`DATABASE_URL`). Required; startup is
    /// aborted when it is missing.
    pub database_url: String,
}

fn default_port() -> u16 {
    8080
}

fn default_node_env() -> String {
    "development".to_string()
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Whether the service runs under the production marker.
    pub fn is_production(&self) -> bool {
        self.node_env == PRODUCTION_ENV
    }
}
