//! Error types for job sources.

use thiserror::Error;

/// Result type for source operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors a job source can report.
///
/// The dashboard collapses all of these into a single "fetch failure" at the
/// poller boundary; the variants exist so logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The source could not be reached.
    #[error("Job source unavailable: {0}")]
    Unavailable(String),

    /// The source did not answer within its deadline.
    #[error("Job source timed out")]
    Timeout,

    /// The source answered with data we could not interpret.
    #[error("Malformed response from job source: {0}")]
    Malformed(String),
}
