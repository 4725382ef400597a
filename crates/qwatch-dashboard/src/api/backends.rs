//! Backend status endpoint.
//!
//! Passes straight through to the source with a single attempt; the retry
//! schedule exists for the job poll, not for this extension surface.

use std::sync::Arc;

use axum::{Json, extract::State};

use qwatch_types::BackendInfo;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/backends - Status records for all known backends.
pub async fn list_backends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BackendInfo>>, ApiError> {
    let backends = state.source.backends().await?;
    Ok(Json(backends))
}
