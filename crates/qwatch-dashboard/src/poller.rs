//! Background poller that keeps the job snapshot fresh.
//!
//! One fetch on startup, then one per interval. A manual refresh reuses the
//! same path, so a timer tick and a refresh may race; whichever resolves
//! last wins the snapshot. That inconsistency window is accepted rather than
//! sequenced away.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{error, info, warn};

use qwatch_client::{ClientError, ClientResult, JobSource, RetryPolicy};
use qwatch_types::QuantumJob;

/// Last observed state of the poll loop.
///
/// `jobs` is the last successfully fetched batch, replaced wholesale on each
/// success and preserved (stale but valid) across failed fetches. `error` is
/// reserved for the full-page failure state: it is only set when retries are
/// exhausted before any fetch has ever succeeded.
#[derive(Debug, Clone)]
pub struct PollerSnapshot {
    /// Last successfully fetched batch, empty before the first success.
    pub jobs: Vec<QuantumJob>,
    /// True until the first fetch resolves, success or failure.
    pub is_loading: bool,
    /// True while any fetch is in flight, refreshes included.
    pub is_fetching: bool,
    /// Fetch-failure message; set only when no batch was ever loaded.
    pub error: Option<String>,
    /// When `jobs` was last replaced.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for PollerSnapshot {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            is_loading: true,
            is_fetching: false,
            error: None,
            last_updated: None,
        }
    }
}

/// Polling state holder around a [`JobSource`].
pub struct JobPoller {
    source: Arc<dyn JobSource>,
    retry: RetryPolicy,
    snapshot: RwLock<PollerSnapshot>,
}

impl JobPoller {
    /// Create a poller for the given source.
    pub fn new(source: Arc<dyn JobSource>, retry: RetryPolicy) -> Self {
        Self {
            source,
            retry,
            snapshot: RwLock::new(PollerSnapshot::default()),
        }
    }

    /// Clone of the current snapshot.
    pub async fn snapshot(&self) -> PollerSnapshot {
        self.snapshot.read().await.clone()
    }

    /// One fetch attempt per the retry schedule.
    async fn fetch_with_retry(&self) -> ClientResult<Vec<QuantumJob>> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.source.jobs().await {
                Ok(jobs) => return Ok(jobs),
                Err(e) if attempt < self.retry.attempts() => {
                    warn!(
                        source = self.source.name(),
                        attempt,
                        error = %e,
                        "job fetch failed, retrying"
                    );
                    time::sleep(self.retry.delay_for(attempt)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one full fetch: retries, then snapshot update.
    ///
    /// On success the batch is replaced wholesale, `error` cleared, and the
    /// new batch size returned. On exhausted retries the previous batch is
    /// kept and `error` is set only if nothing was ever loaded — a failed
    /// refresh after a good load stays a transient condition, not a
    /// full-page one.
    pub async fn fetch_once(&self) -> Result<usize, ClientError> {
        self.snapshot.write().await.is_fetching = true;

        let result = self.fetch_with_retry().await;

        let mut snapshot = self.snapshot.write().await;
        snapshot.is_fetching = false;
        snapshot.is_loading = false;
        match result {
            Ok(jobs) => {
                let count = jobs.len();
                snapshot.jobs = jobs;
                snapshot.error = None;
                snapshot.last_updated = Some(Utc::now());
                Ok(count)
            }
            Err(e) => {
                if snapshot.last_updated.is_none() {
                    snapshot.error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Manual refresh, independent of the timer.
    pub async fn refresh(&self) -> Result<usize, ClientError> {
        match self.fetch_once().await {
            Ok(count) => {
                info!(source = self.source.name(), jobs = count, "manual refresh succeeded");
                Ok(count)
            }
            Err(e) => {
                error!(source = self.source.name(), error = %e, "manual refresh failed");
                Err(e)
            }
        }
    }

    /// Start the poll loop: fetch immediately, then once per `interval`.
    ///
    /// The returned handle owns the task; dropping it stops polling. Any
    /// fetch in flight at that point is simply discarded.
    pub fn spawn(self: &Arc<Self>, interval: Duration) -> PollerHandle {
        let poller = Arc::clone(self);
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = poller.fetch_once().await {
                    error!(source = poller.source.name(), error = %e, "poll fetch failed");
                }
            }
        });
        PollerHandle { task }
    }
}

/// Scoped handle for the poll loop. Aborts the task on drop so no timer
/// outlives the dashboard that started it.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling explicitly.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
