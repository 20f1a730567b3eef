//! Keep-alive self-ping subsystem.
//!
//! Hosting platforms that idle out services watch public inbound traffic, so
//! the service periodically issues a GET against its own public `/health`
//! URL to simulate it. The prober runs only under the production marker,
//! shares no state with request handling, and is cancelled on shutdown.
//!
//! Probe failures are logged and otherwise ignored: the next scheduled tick
//! is the retry policy. There is no backoff, no failure threshold, and no
//! mutual exclusion between probes; a slow probe may overlap the next one.

use std::future::Future;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use tokio::task::JoinHandle;

/// Public URL of this service's own health endpoint.
///
/// Deliberately the public hostname, not loopback: the idling mechanism
/// being defeated monitors public inbound traffic.
pub const SELF_PING_URL: &str = "https://supplychain-api.onrender.com/health";

/// Time between probes. Well under typical idle-suspend thresholds.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);

/// Upper bound on a single probe's round trip, so stalled probes cannot
/// accumulate indefinitely.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the running prober. At most one exists per process lifetime,
/// owned by the server startup routine and threaded into shutdown handling.
#[derive(Debug)]
pub struct ProberHandle {
    task: JoinHandle<()>,
}

impl ProberHandle {
    /// Stop the schedule. No further probes fire; a probe already in flight
    /// completes or fails on its own. Safe to call more than once.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

/// Spawn the prober against the given URL.
///
/// The first probe fires one full interval after spawn, then repeats every
/// [`PROBE_INTERVAL`] until the handle is cancelled.
pub fn spawn(url: &str) -> Result<ProberHandle, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()?;
    let url = url.to_string();

    Ok(spawn_with_probe(PROBE_INTERVAL, move || {
        probe(client.clone(), url.clone())
    }))
}

/// Spawn the timer loop with an arbitrary probe future factory.
///
/// Each tick detaches one probe task, so a probe that outlives the interval
/// never delays the schedule.
pub(crate) fn spawn_with_probe<F, Fut>(period: Duration, mut make_probe: F) -> ProberHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let start = tokio::time::Instant::now() + period;
    let mut ticker = tokio::time::interval_at(start, period);

    let task = tokio::spawn(async move {
        loop {
            ticker.tick().await;
            tokio::spawn(make_probe());
        }
    });

    ProberHandle { task }
}

/// One probe cycle: GET the health URL and log the outcome.
///
/// Any HTTP response counts as success, whatever the status code; only
/// transport-level failures are logged as errors. Neither outcome touches
/// the timer.
async fn probe(client: reqwest::Client, url: String) {
    match client.get(&url).send().await {
        Ok(response) => {
            tracing::info!(
                status = response.status().as_u16(),
                timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                "Self-ping successful"
            );
        }
        Err(error) => {
            tracing::error!(error = %error, "Self-ping failed");
        }
    }
}
