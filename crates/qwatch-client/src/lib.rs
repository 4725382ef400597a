//! Job source boundary for qwatch.
//!
//! This crate defines the single external interface the dashboard consumes:
//! the [`JobSource`] trait, which a real deployment implements against an
//! authenticated quantum provider API. It also ships:
//!
//! - [`RetryPolicy`] — the bounded-retry schedule the poller drives before a
//!   fetch surfaces as failed
//! - [`MockSource`] — a random batch generator standing in for a real API
//!   client, useful for demos and tests
//!
//! # Example
//!
//! ```rust,no_run
//! use qwatch_client::{ClientResult, JobSource, MockSource};
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let source = MockSource::new();
//!     let jobs = source.jobs().await?;
//!     println!("{} jobs in the current batch", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod retry;
pub mod source;

pub use error::{ClientError, ClientResult};
pub use mock::MockSource;
pub use retry::RetryPolicy;
pub use source::JobSource;
