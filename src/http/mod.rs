//! HTTP server startup and shutdown.
//!
//! The listener is bound and logged before anything else is scheduled; the
//! keep-alive prober is spawned right after a successful bind, production
//! only. SIGINT/SIGTERM cancel the prober and drain the server gracefully.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
