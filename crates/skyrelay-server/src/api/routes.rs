//! REST API routes.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{airports, flights, request_id, schedules, weather};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/airports", get(airports::list_airports))
        .route("/api/flights/live", get(flights::live_flights))
        .route("/api/weather", get(weather::get_weather))
        .route("/api/schedules", get(schedules::get_schedules))
}

/// The complete service: API routes, health check, tracing and open CORS.
pub fn create_app(state: Arc<AppState>) -> Router {
    create_router()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(middleware::from_fn(request_id::ensure_request_id))
        .layer(TraceLayer::new_for_http())
        // The front-end is hosted separately; any origin may call us.
        .layer(CorsLayer::permissive())
}
