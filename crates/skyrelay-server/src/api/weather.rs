//! City weather endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use skyrelay_core::{shaping, WeatherRecord};
use std::sync::Arc;

use crate::api::error::{first_param, required_param, ApiError};
use crate::state::AppState;

const NO_WEATHER: &str = "No weather data found";

/// Current weather for the city matching an IATA code.
///
/// A provider failure answers 404 like an empty result; only the log tells
/// the two apart.
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let iata = required_param(first_param(&pairs, "iata"))
        .ok_or(ApiError::Validation("IATA code is required"))?;

    let params = [("query", iata.clone()), ("limit", "1".to_string())];
    let Some(body) = state.aviation.fetch("cities", &params).await else {
        tracing::warn!("No weather for {}: provider unavailable", iata);
        return Err(ApiError::NotFound(NO_WEATHER));
    };

    match shaping::weather(&body).map_err(|e| ApiError::Internal(e.to_string()))? {
        Some(record) => Ok(Json(record)),
        None => {
            tracing::info!("No weather for {}: provider returned no cities", iata);
            Err(ApiError::NotFound(NO_WEATHER))
        }
    }
}
