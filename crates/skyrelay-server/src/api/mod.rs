//! API routes for the SkyRelay server.

pub mod airports;
pub mod error;
pub mod flights;
pub mod request_id;
mod routes;
pub mod schedules;
pub mod weather;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub use error::ApiError;

pub fn app(state: Arc<AppState>) -> Router {
    routes::create_app(state)
}
