//! The job source trait.

use async_trait::async_trait;

use qwatch_types::{BackendInfo, QuantumJob};

use crate::error::ClientResult;

/// Trait for anything that can supply job and backend batches.
///
/// This is the only interface the dashboard consumes. Implementations MUST
/// signal failure via `Err`, never via a sentinel value, and SHOULD resolve
/// within a bounded time so the caller's retry schedule stays meaningful.
///
/// # Contract
///
/// - `jobs()` returns the current batch ordered newest-created-first.
/// - Each call returns a fresh snapshot; records are never mutated in place.
/// - `backends()` reports per-backend status; it is an extension surface and
///   may be called independently of the job poll.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Human-readable source name, used in logs.
    fn name(&self) -> &str;

    /// Fetch the current job batch, newest first.
    async fn jobs(&self) -> ClientResult<Vec<QuantumJob>>;

    /// Fetch status records for all known backends.
    async fn backends(&self) -> ClientResult<Vec<BackendInfo>>;
}
