//! Quantum job records.
//!
//! A [`QuantumJob`] is an immutable snapshot of a job as reported by the
//! source: a poll replaces the whole batch, records are never mutated in
//! place. Identifiers are unique within a batch; there are no cross-job
//! relationships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a quantum job.
///
/// Wire values use the upstream SCREAMING_SNAKE_CASE spelling
/// (`"QUEUED"`, `"DONE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Job accepted, not yet queued.
    Initializing,
    /// Job is waiting in the backend queue.
    Queued,
    /// Circuit is being validated against backend constraints.
    Validating,
    /// Job is currently executing.
    Running,
    /// Job was cancelled.
    Cancelled,
    /// Job completed successfully.
    Done,
    /// Job failed.
    Error,
}

impl JobStatus {
    /// All statuses, in lifecycle order. Used to populate filter options.
    pub const ALL: [JobStatus; 7] = [
        JobStatus::Initializing,
        JobStatus::Queued,
        JobStatus::Validating,
        JobStatus::Running,
        JobStatus::Cancelled,
        JobStatus::Done,
        JobStatus::Error,
    ];

    /// The wire spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Queued => "QUEUED",
            JobStatus::Validating => "VALIDATING",
            JobStatus::Running => "RUNNING",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Done => "DONE",
            JobStatus::Error => "ERROR",
        }
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Cancelled | JobStatus::Done | JobStatus::Error
        )
    }

    /// Check if the job is still making progress (anything non-terminal).
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single quantum job snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumJob {
    /// Job identifier, unique within a fetch batch.
    pub id: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current status.
    pub status: JobStatus,
    /// Backend the job was submitted to.
    pub backend: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Position in the backend queue; present only while queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Number of shots requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Number of qubits used by the circuit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qubits: Option<u32>,
    /// Depth of the circuit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_depth: Option<u32>,
    /// User-assigned tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl QuantumJob {
    /// Create a new job snapshot with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        status: JobStatus,
        backend: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            status,
            backend: backend.into(),
            created,
            position: None,
            shots: None,
            qubits: None,
            circuit_depth: None,
            tags: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the queue position.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Set the qubit count.
    pub fn with_qubits(mut self, qubits: u32) -> Self {
        self.qubits = Some(qubits);
        self
    }

    /// Set the circuit depth.
    pub fn with_circuit_depth(mut self, depth: u32) -> Self {
        self.circuit_depth = Some(depth);
        self
    }

    /// Set the tag list.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}
