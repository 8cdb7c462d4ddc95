//! Today's scheduled flights endpoint.
//!
//! Unlike live flights, an unreachable provider is not an error here: the
//! client gets an empty list and a message.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use skyrelay_core::{shaping, SchedulesResponse};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::flights::RouteQuery;
use crate::state::AppState;

const NO_SCHEDULES: &str = "No scheduled flights found";

pub(crate) fn flight_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub async fn get_schedules(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SchedulesResponse>, ApiError> {
    let (departure, arrival) = RouteQuery::from_pairs(&pairs).codes()?;

    let params = [
        ("dep_iata", departure),
        ("arr_iata", arrival),
        ("flight_status", "scheduled".to_string()),
        ("flight_date", flight_date(Local::now().date_naive())),
    ];
    let Some(body) = state.aviation.fetch("flights", &params).await else {
        return Ok(Json(SchedulesResponse::empty(NO_SCHEDULES)));
    };

    match shaping::schedules(&body).map_err(|e| ApiError::InternalWithDetails(e.to_string()))? {
        Some(records) => Ok(Json(SchedulesResponse::found(records))),
        None => Ok(Json(SchedulesResponse::empty(NO_SCHEDULES))),
    }
}
