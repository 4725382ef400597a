//! Domain types for the qwatch monitoring dashboard.
//!
//! This crate holds the pure, synchronous core of qwatch:
//!
//! - [`QuantumJob`] and [`JobStatus`] — immutable job snapshots as reported
//!   by a job source
//! - [`BackendInfo`] — per-backend status records
//! - [`JobFilter`] — user-entered search/status/backend criteria and the
//!   derived filtered view
//! - [`JobStats`] — the five-bucket aggregate counter for the stats panel
//!
//! Everything here is a pure function over in-memory data. Polling, retry,
//! and HTTP concerns live in `qwatch-client` and `qwatch-dashboard`.

pub mod backend;
pub mod filter;
pub mod job;
pub mod stats;

pub use backend::{BackendInfo, BackendState};
pub use filter::{JobFilter, backend_options};
pub use job::{JobStatus, QuantumJob};
pub use stats::JobStats;
