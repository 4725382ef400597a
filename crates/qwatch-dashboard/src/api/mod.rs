//! API endpoint handlers.

pub mod backends;
pub mod filters;
pub mod health;
pub mod jobs;
