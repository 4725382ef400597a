//! Aggregate counts for the stats panel.

use serde::{Deserialize, Serialize};

use crate::job::{JobStatus, QuantumJob};

/// Five-bucket summary of a fetched batch.
///
/// Stats always describe the whole batch, never the filtered subset.
/// Initializing, validating, and cancelled jobs count toward `total` but have
/// no bucket of their own — the tile layout is fixed at five.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    /// Batch size.
    pub total: usize,
    /// Jobs with status `QUEUED`.
    pub queued: usize,
    /// Jobs with status `RUNNING`.
    pub running: usize,
    /// Jobs with status `DONE`.
    pub completed: usize,
    /// Jobs with status `ERROR`.
    pub failed: usize,
}

impl JobStats {
    /// Count buckets over a batch in a single O(n) pass.
    pub fn from_jobs(jobs: &[QuantumJob]) -> Self {
        let mut stats = JobStats {
            total: jobs.len(),
            ..Default::default()
        };
        for job in jobs {
            match job.status {
                JobStatus::Queued => stats.queued += 1,
                JobStatus::Running => stats.running += 1,
                JobStatus::Done => stats.completed += 1,
                JobStatus::Error => stats.failed += 1,
                JobStatus::Initializing | JobStatus::Validating | JobStatus::Cancelled => {}
            }
        }
        stats
    }

    /// Sum of the four status buckets. Always `<= total`.
    pub fn bucketed(&self) -> usize {
        self.queued + self.running + self.completed + self.failed
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn job(id: &str, status: JobStatus) -> QuantumJob {
        QuantumJob::new(id, status, "ibm_brisbane", Utc::now())
    }

    #[test]
    fn test_empty_batch() {
        let stats = JobStats::from_jobs(&[]);
        assert_eq!(stats, JobStats::default());
    }

    #[test]
    fn test_buckets_map_one_to_one() {
        let jobs = vec![
            job("j1", JobStatus::Queued),
            job("j2", JobStatus::Queued),
            job("j3", JobStatus::Running),
            job("j4", JobStatus::Done),
            job("j5", JobStatus::Error),
        ];
        let stats = JobStats::from_jobs(&jobs);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.queued, 2);
        assert_eq!(stats.running, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.bucketed(), stats.total);
    }

    #[test]
    fn test_untallied_statuses_count_toward_total_only() {
        let jobs = vec![
            job("j1", JobStatus::Validating),
            job("j2", JobStatus::Initializing),
            job("j3", JobStatus::Cancelled),
            job("j4", JobStatus::Done),
        ];
        let stats = JobStats::from_jobs(&jobs);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.bucketed(), 1);
        assert!(stats.bucketed() <= stats.total);
    }
}
