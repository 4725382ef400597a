//! Bounded retry schedule for fetches.

use std::time::Duration;

/// Retry schedule for a single logical fetch.
///
/// A fetch is one initial attempt plus up to `max_retries` retries; only
/// after the whole schedule is exhausted does the failure surface to the
/// caller. Delays double from `base_delay` and are capped so a flaky source
/// cannot stall the poll loop for long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry; subsequent delays double.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries. Handy for tests and one-shot endpoints.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Total attempts the schedule allows, initial attempt included.
    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay to wait before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u32 << retry.saturating_sub(1).min(16);
        self.base_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }
}
