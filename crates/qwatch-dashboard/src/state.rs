//! Application state for the dashboard server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use qwatch_client::{JobSource, RetryPolicy};

use crate::filters::FilterForm;
use crate::poller::JobPoller;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// How often the background poller refetches the job batch.
    pub poll_interval: Duration,
    /// Retry schedule for each fetch.
    pub retry: RetryPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3900).into(),
            poll_interval: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The job source, reachable directly for the backends endpoint.
    pub source: Arc<dyn JobSource>,
    /// Polling state holder over the same source.
    pub poller: Arc<JobPoller>,
    /// Filter state, owned here and mutated only through the filters API.
    pub filters: RwLock<FilterForm>,
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create application state with default configuration.
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self::with_config(source, DashboardConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(source: Arc<dyn JobSource>, config: DashboardConfig) -> Self {
        let poller = Arc::new(JobPoller::new(Arc::clone(&source), config.retry));
        Self {
            source,
            poller,
            filters: RwLock::new(FilterForm::new()),
            config,
        }
    }
}
