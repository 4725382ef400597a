//! Mock job source.
//!
//! Generates random-but-plausible batches for demos and tests. A real
//! deployment replaces this with an authenticated API client implementing
//! [`JobSource`]; everything downstream of the trait is unchanged.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use qwatch_types::{BackendInfo, BackendState, JobStatus, QuantumJob};

use crate::error::ClientResult;
use crate::source::JobSource;

/// Backend roster the generator draws from.
const MOCK_BACKENDS: [&str; 8] = [
    "ibm_brisbane",
    "ibm_kyoto",
    "ibm_osaka",
    "ibm_sherbrooke",
    "ibm_torino",
    "ibm_nazca",
    "ibm_fez",
    "ibm_kawasaki",
];

/// Statuses the generator assigns. Initializing and cancelled jobs are rare
/// enough upstream that the generator skips them.
const MOCK_STATUSES: [JobStatus; 5] = [
    JobStatus::Queued,
    JobStatus::Running,
    JobStatus::Done,
    JobStatus::Error,
    JobStatus::Validating,
];

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Randomized in-process job source.
#[derive(Debug, Clone)]
pub struct MockSource {
    /// Simulated per-call latency; zero by default so tests stay fast.
    latency: Duration,
}

impl MockSource {
    /// Create a mock source with no simulated latency.
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Add a simulated per-call delay, for demoing loading states.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn generate_job(rng: &mut impl Rng) -> QuantumJob {
        let suffix: String = (0..9)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect();
        let id = format!("job_{suffix}");
        let status = MOCK_STATUSES[rng.gen_range(0..MOCK_STATUSES.len())];
        let backend = MOCK_BACKENDS[rng.gen_range(0..MOCK_BACKENDS.len())];
        // Created sometime in the past week.
        let age = chrono::Duration::seconds(rng.gen_range(0..7 * 24 * 3600));
        let created = Utc::now() - age;

        let mut job = QuantumJob::new(&id, status, backend, created)
            .with_name(format!("quantum_circuit_{}", &id[id.len() - 4..]))
            .with_shots(rng.gen_range(1024..=9215))
            .with_qubits(rng.gen_range(5..=131))
            .with_circuit_depth(rng.gen_range(10..=109));

        if status == JobStatus::Queued {
            job = job.with_position(rng.gen_range(1..=50));
        }

        let tags = ["research", "optimization"];
        let take = rng.gen_range(1..=tags.len());
        job.with_tags(tags[..take].iter().map(|t| t.to_string()).collect())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn jobs(&self) -> ClientResult<Vec<QuantumJob>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rng = rand::thread_rng();
        let count = rng.gen_range(15..=24);
        let mut jobs: Vec<QuantumJob> = (0..count).map(|_| Self::generate_job(&mut rng)).collect();
        // Contract: batches arrive newest-created-first.
        jobs.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(jobs)
    }

    async fn backends(&self) -> ClientResult<Vec<BackendInfo>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rng = rand::thread_rng();
        Ok(MOCK_BACKENDS
            .iter()
            .map(|name| BackendInfo {
                name: name.to_string(),
                status: if rng.gen_bool(0.8) {
                    BackendState::Operational
                } else {
                    BackendState::Maintenance
                },
                qubits: rng.gen_range(5..=124),
                pending_jobs: rng.gen_range(0..=99),
                description: None,
            })
            .collect())
    }
}
