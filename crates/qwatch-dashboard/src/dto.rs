//! Data Transfer Objects for the dashboard API.
//!
//! These types bridge the qwatch domain structures to JSON-serializable API
//! responses the embedded frontend renders from.

use serde::{Deserialize, Serialize};

use qwatch_types::{JobStatus, QuantumJob};

// ============================================================================
// Health DTOs
// ============================================================================

/// Response from the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers at all.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// ============================================================================
// Job DTOs
// ============================================================================

/// A job card for the list view.
#[derive(Debug, Serialize)]
pub struct JobView {
    /// Job ID.
    pub id: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Status in wire spelling (e.g. `"QUEUED"`).
    pub status: String,
    /// Backend name.
    pub backend: String,
    /// Creation timestamp, RFC 3339.
    pub created: String,
    /// Queue position, present only while queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Shot count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Qubit count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qubits: Option<u32>,
    /// Circuit depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_depth: Option<u32>,
    /// User tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<&QuantumJob> for JobView {
    fn from(job: &QuantumJob) -> Self {
        Self {
            id: job.id.clone(),
            name: job.name.clone(),
            status: job.status.as_str().to_string(),
            backend: job.backend.clone(),
            created: job.created.to_rfc3339(),
            position: job.position,
            shots: job.shots,
            qubits: job.qubits,
            circuit_depth: job.circuit_depth,
            tags: job.tags.clone(),
        }
    }
}

/// Response for the job list endpoint: the filtered view plus the size of
/// the raw batch it was derived from.
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    /// Jobs matching the currently applied filters, source order preserved.
    pub jobs: Vec<JobView>,
    /// Unfiltered batch size.
    pub total: usize,
}

/// Observable state of the background poller.
#[derive(Debug, Serialize)]
pub struct PollerStatus {
    /// True until the first fetch resolves, success or failure.
    pub loading: bool,
    /// True while any fetch is in flight, refreshes included.
    pub fetching: bool,
    /// Set when the initial load exhausted its retries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the batch was last replaced, RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Size of the last successfully fetched batch.
    pub job_count: usize,
}

/// Response for a successful manual refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Always true on a 200; failures arrive as a `source_error`.
    pub refreshed: bool,
    /// Size of the freshly fetched batch.
    pub jobs: usize,
    /// Notification text for the frontend toast.
    pub message: String,
}

// ============================================================================
// Filter DTOs
// ============================================================================

/// Current filter state plus the option lists the controls render from.
#[derive(Debug, Serialize)]
pub struct FiltersView {
    /// Applied search criterion.
    pub search: String,
    /// Buffered, not-yet-submitted search text.
    pub search_input: String,
    /// Applied status criterion (wire spelling, empty = all).
    pub status: String,
    /// Applied backend criterion (empty = all).
    pub backend: String,
    /// All known status values, for the status selector.
    pub statuses: Vec<&'static str>,
    /// Distinct backends in the raw batch, ascending. Independent of the
    /// current filters so the selector never shrinks with the results.
    pub backends: Vec<String>,
}

impl FiltersView {
    /// Status option list, in lifecycle order.
    pub fn status_options() -> Vec<&'static str> {
        JobStatus::ALL.iter().map(|s| s.as_str()).collect()
    }
}

/// Partial update for the applied criteria. Absent fields are left alone;
/// any string is accepted, including one that matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFiltersRequest {
    /// New applied search criterion (submitted, not buffered).
    pub search: Option<String>,
    /// New status criterion.
    pub status: Option<String>,
    /// New backend criterion.
    pub backend: Option<String>,
}

/// Buffered search text, applied only on explicit submission.
#[derive(Debug, Deserialize)]
pub struct SearchInputRequest {
    /// The raw text in the search box.
    pub value: String,
}
