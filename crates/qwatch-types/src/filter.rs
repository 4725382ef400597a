//! Filter criteria and the derived job view.
//!
//! A [`JobFilter`] holds the three user-entered criteria. Empty string means
//! "no constraint"; a job is shown iff it matches all three (logical AND).
//! Filtering is an order-preserving O(n) scan — the source already delivers
//! batches newest-created-first and that order carries through.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::job::QuantumJob;

/// User-entered filter criteria for the job list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    /// Free-text search over job id and name, case-insensitive substring.
    #[serde(default)]
    pub search: String,
    /// Exact status match against the wire spelling (e.g. `"QUEUED"`).
    #[serde(default)]
    pub status: String,
    /// Exact backend name match.
    #[serde(default)]
    pub backend: String,
}

impl JobFilter {
    /// Create a filter with all criteria unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion constrains the view.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_empty() && self.backend.is_empty()
    }

    /// Reset all three criteria at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether a single job satisfies all three criteria.
    ///
    /// Any string is accepted as a criterion, including one that matches
    /// nothing — an empty result is not an error.
    pub fn matches(&self, job: &QuantumJob) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            job.id.to_lowercase().contains(&needle)
                || job
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
        };

        let matches_status = self.status.is_empty() || self.status == job.status.as_str();
        let matches_backend = self.backend.is_empty() || self.backend == job.backend;

        matches_search && matches_status && matches_backend
    }

    /// Derive the filtered view, preserving source order.
    pub fn apply<'a>(&self, jobs: &'a [QuantumJob]) -> Vec<&'a QuantumJob> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Distinct backend names present in a batch, ascending lexicographic order.
///
/// Always computed from the unfiltered batch so the backend selector does not
/// shrink as filters narrow the result.
pub fn backend_options(jobs: &[QuantumJob]) -> Vec<String> {
    jobs.iter()
        .map(|job| job.backend.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::job::JobStatus;

    fn job(id: &str, status: JobStatus, backend: &str) -> QuantumJob {
        QuantumJob::new(id, status, backend, Utc::now())
    }

    fn sample_batch() -> Vec<QuantumJob> {
        vec![
            job("a1", JobStatus::Queued, "x"),
            job("b2", JobStatus::Done, "y"),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let jobs = sample_batch();
        let filter = JobFilter::new();
        assert!(filter.is_empty());
        let view = filter.apply(&jobs);
        assert_eq!(view.len(), jobs.len());
        for (shown, original) in view.iter().zip(&jobs) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn test_search_matches_id_substring() {
        let jobs = sample_batch();
        let filter = JobFilter {
            search: "a1".into(),
            ..Default::default()
        };
        let view = filter.apply(&jobs);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "a1");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let jobs = vec![job("JOB_ABC", JobStatus::Running, "x")];
        let filter = JobFilter {
            search: "job_abc".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&jobs).len(), 1);
    }

    #[test]
    fn test_search_matches_name() {
        let jobs = vec![
            job("j1", JobStatus::Running, "x").with_name("quantum_circuit_42"),
            job("j2", JobStatus::Running, "x"),
        ];
        let filter = JobFilter {
            search: "CIRCUIT_42".into(),
            ..Default::default()
        };
        let view = filter.apply(&jobs);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "j1");
    }

    #[test]
    fn test_absent_name_never_matches_nonempty_search() {
        let jobs = vec![job("j1", JobStatus::Running, "x")];
        let filter = JobFilter {
            search: "circuit".into(),
            ..Default::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_status_filter_exact_and_case_sensitive() {
        let jobs = sample_batch();
        let filter = JobFilter {
            status: "QUEUED".into(),
            ..Default::default()
        };
        let view = filter.apply(&jobs);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].status, JobStatus::Queued);

        // Lowercase criterion matches nothing — enumeration values only.
        let filter = JobFilter {
            status: "queued".into(),
            ..Default::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_unmatched_status_yields_empty_view() {
        let jobs = sample_batch();
        let filter = JobFilter {
            status: "ERROR".into(),
            ..Default::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let jobs = vec![
            job("a1", JobStatus::Queued, "x"),
            job("a2", JobStatus::Queued, "y"),
            job("a3", JobStatus::Done, "x"),
        ];
        let filter = JobFilter {
            search: "a".into(),
            status: "QUEUED".into(),
            backend: "x".into(),
        };
        let view = filter.apply(&jobs);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "a1");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let jobs = sample_batch();
        let filter = JobFilter {
            backend: "y".into(),
            ..Default::default()
        };
        let first: Vec<String> = filter.apply(&jobs).iter().map(|j| j.id.clone()).collect();
        let second: Vec<String> = filter.apply(&jobs).iter().map(|j| j.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_resets_all_criteria() {
        let mut filter = JobFilter {
            search: "a".into(),
            status: "DONE".into(),
            backend: "x".into(),
        };
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_backend_options_distinct_and_sorted() {
        let jobs = vec![
            job("j1", JobStatus::Queued, "ibm_kyoto"),
            job("j2", JobStatus::Running, "ibm_brisbane"),
            job("j3", JobStatus::Done, "ibm_brisbane"),
        ];
        assert_eq!(backend_options(&jobs), vec!["ibm_brisbane", "ibm_kyoto"]);
    }

    #[test]
    fn test_backend_options_ignore_filters() {
        // Options reflect the full unfiltered universe by construction:
        // they are computed from the raw batch, not the filtered view.
        let jobs = vec![
            job("j1", JobStatus::Queued, "ibm_kyoto"),
            job("j2", JobStatus::Done, "ibm_brisbane"),
        ];
        let filter = JobFilter {
            backend: "ibm_kyoto".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&jobs).len(), 1);
        assert_eq!(backend_options(&jobs).len(), 2);
    }
}
