//! Supply Chain API server.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from environment variables, connects to the database
//! (fatal on failure), assembles the Axum router with its middleware stack
//! and mounted API groups, and starts the HTTP server. In production the
//! server also runs a keep-alive self-ping against the service's public
//! health endpoint.

mod config;
mod db;
mod error;
mod http;
mod keepalive;
mod middleware;
mod routes;
mod state;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, DEFAULT_LOG_FILTER};
use routes::{create_router, ApiRoutes};
use state::AppState;

/// Supply Chain API: product, batch, and consumer tracking backend
#[derive(Parser, Debug)]
#[command(name = "supplychain-api", version, about)]
struct Args {
    /// Log level filter (e.g., "supplychain_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from the environment
    let config = Config::load()?;
    tracing::info!(environment = %config.node_env, "Loaded configuration");

    // Connect to the database before serving any traffic. Failure here is
    // fatal: the process must not come up with a dead store behind it.
    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed, aborting startup");
            return Err(e.into());
        }
    };

    // Create application state and router. The five API groups are supplied
    // externally; an unwired group simply 404s under its prefix.
    let state = AppState::new(config.clone(), pool);
    let app = create_router(state, ApiRoutes::default());

    // Start server; blocks until a termination signal drains it
    http::start_server(app, &config).await?;

    Ok(())
}
