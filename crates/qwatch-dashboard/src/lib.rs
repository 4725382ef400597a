//! qwatch dashboard - Web interface for quantum job monitoring.
//!
//! This crate serves the qwatch dashboard: a background poller fetches the
//! job batch from a [`qwatch_client::JobSource`] every 30 seconds, and an
//! Axum server exposes the derived state (filtered job cards, backend
//! options, five-tile summary stats) plus a small embedded frontend.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qwatch_client::MockSource;
//! use qwatch_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(Arc::new(MockSource::new()), config.clone()));
//!
//!     let _poll = state.poller.spawn(config.poll_interval);
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod filters;
pub mod poller;
pub mod server;
pub mod state;

pub use dto::{
    FiltersView, HealthResponse, JobListResponse, JobView, PollerStatus, RefreshResponse,
    UpdateFiltersRequest,
};
pub use error::ApiError;
pub use filters::FilterForm;
pub use poller::{JobPoller, PollerHandle, PollerSnapshot};
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
