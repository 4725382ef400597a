//! Property-based tests for job filtering and aggregation.
//!
//! Checks the invariants the dashboard relies on: empty criteria are the
//! identity, status filtering is sound and complete, backend options are
//! always the sorted distinct set of the raw batch, and stat buckets never
//! exceed the batch size.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use qwatch_types::{JobFilter, JobStats, JobStatus, QuantumJob, backend_options};

/// Generate a random job with identifiers and backends drawn from small
/// pools so collisions across criteria actually happen.
fn arb_job() -> impl Strategy<Value = QuantumJob> {
    let statuses = prop::sample::select(JobStatus::ALL.to_vec());
    let backends = prop::sample::select(vec!["ibm_brisbane", "ibm_kyoto", "ibm_fez", "ibm_osaka"]);
    (
        "[a-z0-9]{4,10}",
        statuses,
        backends,
        prop::option::of("[a-z_]{3,12}"),
        0i64..1_000_000,
    )
        .prop_map(|(id, status, backend, name, offset)| {
            let created = Utc.timestamp_opt(1_700_000_000 + offset, 0).unwrap();
            let mut job = QuantumJob::new(format!("job_{id}"), status, backend, created);
            job.name = name;
            job
        })
}

fn arb_batch() -> impl Strategy<Value = Vec<QuantumJob>> {
    prop::collection::vec(arb_job(), 0..25)
}

proptest! {
    #[test]
    fn empty_filter_is_identity(jobs in arb_batch()) {
        let filter = JobFilter::new();
        let view = filter.apply(&jobs);
        prop_assert_eq!(view.len(), jobs.len());
        for (shown, original) in view.iter().zip(jobs.iter()) {
            prop_assert_eq!(*shown, original);
        }
    }

    #[test]
    fn status_filter_sound_and_complete(jobs in arb_batch(), status in prop::sample::select(JobStatus::ALL.to_vec())) {
        let filter = JobFilter {
            status: status.as_str().to_string(),
            ..Default::default()
        };
        let view = filter.apply(&jobs);
        // Soundness: everything shown has the requested status.
        for job in &view {
            prop_assert_eq!(job.status, status);
        }
        // Completeness: everything with the requested status is shown.
        let expected = jobs.iter().filter(|j| j.status == status).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn filtered_view_preserves_source_order(jobs in arb_batch(), backend in prop::sample::select(vec!["ibm_brisbane", "ibm_kyoto"])) {
        let filter = JobFilter {
            backend: backend.to_string(),
            ..Default::default()
        };
        let view = filter.apply(&jobs);
        let expected: Vec<&QuantumJob> = jobs.iter().filter(|j| j.backend == backend).collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn backend_options_sorted_distinct(jobs in arb_batch()) {
        let options = backend_options(&jobs);
        prop_assert!(options.windows(2).all(|w| w[0] < w[1]));
        for name in &options {
            prop_assert!(jobs.iter().any(|j| &j.backend == name));
        }
        for job in &jobs {
            prop_assert!(options.contains(&job.backend));
        }
    }

    #[test]
    fn apply_is_idempotent(jobs in arb_batch(), search in "[a-z0-9]{0,4}") {
        let filter = JobFilter {
            search,
            ..Default::default()
        };
        let first: Vec<String> = filter.apply(&jobs).iter().map(|j| j.id.clone()).collect();
        let second: Vec<String> = filter.apply(&jobs).iter().map(|j| j.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stats_buckets_bounded_by_total(jobs in arb_batch()) {
        let stats = JobStats::from_jobs(&jobs);
        prop_assert_eq!(stats.total, jobs.len());
        prop_assert!(stats.bucketed() <= stats.total);
    }

    #[test]
    fn stats_ignore_filters(jobs in arb_batch(), status in prop::sample::select(JobStatus::ALL.to_vec())) {
        // Stats are computed from the raw batch; any filtered subset must
        // leave them unchanged.
        let before = JobStats::from_jobs(&jobs);
        let filter = JobFilter {
            status: status.as_str().to_string(),
            ..Default::default()
        };
        let _ = filter.apply(&jobs);
        let after = JobStats::from_jobs(&jobs);
        prop_assert_eq!(before, after);
    }
}
