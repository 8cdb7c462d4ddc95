//! Airport catalog endpoint.

use axum::{extract::State, Json};
use skyrelay_core::{catalog, AirportRecord};
use std::sync::Arc;

use crate::state::AppState;

/// List served airports. Never fails: a broken dataset yields `[]`.
pub async fn list_airports(State(state): State<Arc<AppState>>) -> Json<Vec<AirportRecord>> {
    let path = state.config.airports_csv.clone();
    let airports = tokio::task::spawn_blocking(move || catalog::load_airports(&path))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Airport loader task failed: {}", e);
            Vec::new()
        });
    Json(airports)
}
