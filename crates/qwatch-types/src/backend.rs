//! Backend status records.

use serde::{Deserialize, Serialize};

/// Operational state of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendState {
    /// Accepting and executing jobs.
    Operational,
    /// Temporarily down for maintenance.
    Maintenance,
    /// Not reachable.
    Offline,
}

impl BackendState {
    /// The wire spelling of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendState::Operational => "operational",
            BackendState::Maintenance => "maintenance",
            BackendState::Offline => "offline",
        }
    }
}

impl std::fmt::Display for BackendState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status record for a named backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend name (e.g. `ibm_brisbane`).
    pub name: String,
    /// Current operational state.
    pub status: BackendState,
    /// Number of qubits.
    pub qubits: u32,
    /// Number of jobs waiting on this backend.
    pub pending_jobs: u32,
    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
