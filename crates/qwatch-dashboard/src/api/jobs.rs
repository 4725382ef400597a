//! Job list, stats, poller status, and manual refresh endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use qwatch_types::JobStats;

use crate::dto::{JobListResponse, JobView, PollerStatus, RefreshResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/jobs - The filtered job view.
///
/// Applies the currently held criteria to the latest batch; source order
/// (newest-created-first) is preserved. `total` is the unfiltered batch
/// size, so an empty `jobs` with a non-zero `total` means "filters matched
/// nothing", not "nothing fetched".
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Json<JobListResponse> {
    let snapshot = state.poller.snapshot().await;
    let filters = state.filters.read().await;

    let jobs: Vec<JobView> = filters
        .applied()
        .apply(&snapshot.jobs)
        .into_iter()
        .map(JobView::from)
        .collect();

    Json(JobListResponse {
        jobs,
        total: snapshot.jobs.len(),
    })
}

/// GET /api/jobs/stats - Five-bucket stats over the raw batch.
///
/// Never affected by filter criteria: the tiles describe the whole fetched
/// batch, not the filtered subset.
pub async fn job_stats(State(state): State<Arc<AppState>>) -> Json<JobStats> {
    let snapshot = state.poller.snapshot().await;
    Json(JobStats::from_jobs(&snapshot.jobs))
}

/// GET /api/jobs/{id} - A single job card by id.
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JobView>, ApiError> {
    let snapshot = state.poller.snapshot().await;
    snapshot
        .jobs
        .iter()
        .find(|job| job.id == id)
        .map(|job| Json(JobView::from(job)))
        .ok_or_else(|| ApiError::NotFound(format!("Job not found: {id}")))
}

/// GET /api/poller - Observable poller flags.
pub async fn poller_status(State(state): State<Arc<AppState>>) -> Json<PollerStatus> {
    let snapshot = state.poller.snapshot().await;
    Json(PollerStatus {
        loading: snapshot.is_loading,
        fetching: snapshot.is_fetching,
        error: snapshot.error,
        last_updated: snapshot.last_updated.map(|t| t.to_rfc3339()),
        job_count: snapshot.jobs.len(),
    })
}

/// POST /api/refresh - Manual refresh, independent of the poll timer.
///
/// On failure the previous batch stays in place and the 502 body carries the
/// notification text; only initial-load failures produce the full-page error
/// state.
pub async fn refresh_jobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let count = state.poller.refresh().await.map_err(|_| {
        ApiError::SourceError("Unable to fetch latest job data. Please try again.".to_string())
    })?;

    Ok(Json(RefreshResponse {
        refreshed: true,
        jobs: count,
        message: "Latest quantum job data has been loaded.".to_string(),
    }))
}
