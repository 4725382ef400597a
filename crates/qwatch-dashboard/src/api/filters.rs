//! Filter criteria endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use qwatch_types::backend_options;

use crate::dto::{FiltersView, SearchInputRequest, UpdateFiltersRequest};
use crate::filters::FilterForm;
use crate::state::AppState;

async fn view(state: &AppState, form: &FilterForm) -> FiltersView {
    let snapshot = state.poller.snapshot().await;
    let applied = form.applied();
    FiltersView {
        search: applied.search.clone(),
        search_input: form.search_input().to_string(),
        status: applied.status.clone(),
        backend: applied.backend.clone(),
        statuses: FiltersView::status_options(),
        // Derived from the raw batch so narrowing never shrinks the options.
        backends: backend_options(&snapshot.jobs),
    }
}

/// GET /api/filters - Current criteria plus option lists.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FiltersView> {
    let form = state.filters.read().await;
    Json(view(&state, &form).await)
}

/// PUT /api/filters - Partial update of the applied criteria.
///
/// Absent fields are left untouched. No validation: a criterion that matches
/// nothing yields an empty view, not an error.
pub async fn update_filters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateFiltersRequest>,
) -> Json<FiltersView> {
    let mut form = state.filters.write().await;
    if let Some(search) = req.search {
        form.set_search(search);
    }
    if let Some(status) = req.status {
        form.set_status(status);
    }
    if let Some(backend) = req.backend {
        form.set_backend(backend);
    }
    Json(view(&state, &form).await)
}

/// PUT /api/filters/search-input - Buffer search text without applying it.
///
/// The criterion changes only on submission (PUT /api/filters with `search`).
pub async fn set_search_input(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchInputRequest>,
) -> Json<FiltersView> {
    let mut form = state.filters.write().await;
    form.set_search_input(req.value);
    Json(view(&state, &form).await)
}

/// DELETE /api/filters - Clear all criteria and the search buffer.
pub async fn clear_filters(State(state): State<Arc<AppState>>) -> Json<FiltersView> {
    let mut form = state.filters.write().await;
    form.clear_all();
    Json(view(&state, &form).await)
}
