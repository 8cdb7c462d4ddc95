//! Live flight endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use skyrelay_core::{shaping, LiveFlightsResponse};
use std::sync::Arc;

use crate::api::error::{first_param, required_param, ApiError};
use crate::state::AppState;

const MISSING_ROUTE_CODES: &str = "Both departure and arrival IATA codes are required";
const LIVE_FLIGHT_LIMIT: u32 = 10;

#[derive(Debug)]
pub struct RouteQuery {
    /// Departure airport IATA code
    pub departure: Option<String>,
    /// Arrival airport IATA code
    pub arrival: Option<String>,
}

impl RouteQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            departure: first_param(pairs, "departure"),
            arrival: first_param(pairs, "arrival"),
        }
    }

    /// Both codes, or a validation error if either is missing.
    pub fn codes(self) -> Result<(String, String), ApiError> {
        match (required_param(self.departure), required_param(self.arrival)) {
            (Some(departure), Some(arrival)) => Ok((departure, arrival)),
            _ => Err(ApiError::Validation(MISSING_ROUTE_CODES)),
        }
    }
}

/// Flights currently airborne between two airports.
pub async fn live_flights(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LiveFlightsResponse>, ApiError> {
    let (departure, arrival) = RouteQuery::from_pairs(&pairs).codes()?;

    let params = [
        ("dep_iata", departure),
        ("arr_iata", arrival),
        ("limit", LIVE_FLIGHT_LIMIT.to_string()),
        ("flight_status", "active".to_string()),
    ];
    let body = state
        .aviation
        .fetch("flights", &params)
        .await
        .ok_or(ApiError::UpstreamUnavailable("Unable to fetch flight data"))?;

    let data = shaping::live_flights(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::debug!("Returning {} live flights", data.len());
    Ok(Json(LiveFlightsResponse { data }))
}
