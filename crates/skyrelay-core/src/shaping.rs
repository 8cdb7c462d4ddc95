//! Reshape aviationstack JSON bodies into client-facing records.
//!
//! Every extracted field is looked up independently; a missing or `null`
//! leaf becomes the `"N/A"` sentinel instead of an error. Only a body whose
//! overall shape is wrong (a `data` member that is not a list, or list items
//! that are not objects) is rejected.

use serde_json::Value;
use thiserror::Error;

use crate::models::{
    empty_object, not_available, LiveFlightRecord, ScheduleRecord, WeatherRecord,
};

const SCHEDULED_STATUS: &str = "scheduled";

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("upstream `data` member is not a list (found {found})")]
    DataNotArray { found: &'static str },
    #[error("upstream `data[{index}]` is not an object (found {found})")]
    ItemNotObject { index: usize, found: &'static str },
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Follow `path` through nested objects. `null` anywhere counts as missing.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    (!current.is_null()).then_some(current)
}

/// Value at `path`, or the `"N/A"` sentinel.
pub fn field_or_na(value: &Value, path: &[&str]) -> Value {
    lookup(value, path).cloned().unwrap_or_else(not_available)
}

fn object_or_empty(value: &Value, key: &str) -> Value {
    lookup(value, &[key]).cloned().unwrap_or_else(empty_object)
}

/// The `data` list, `None` when absent or `null`.
fn data_items(body: &Value) -> Result<Option<&[Value]>, ShapeError> {
    match lookup(body, &["data"]) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(other) => Err(ShapeError::DataNotArray {
            found: type_name(other),
        }),
    }
}

fn ensure_objects(items: &[Value]) -> Result<(), ShapeError> {
    match items.iter().position(|item| !item.is_object()) {
        Some(index) => Err(ShapeError::ItemNotObject {
            index,
            found: type_name(&items[index]),
        }),
        None => Ok(()),
    }
}

pub fn live_flight(flight: &Value) -> LiveFlightRecord {
    LiveFlightRecord {
        flight_number: field_or_na(flight, &["flight", "iata"]),
        airline: field_or_na(flight, &["airline", "name"]),
        status: field_or_na(flight, &["flight_status"]),
        departure_time: field_or_na(flight, &["departure", "scheduled"]),
        arrival_time: field_or_na(flight, &["arrival", "scheduled"]),
        delay: field_or_na(flight, &["departure", "delay"]),
    }
}

/// Map a `flights` body to live flight records.
///
/// A missing, `null` or empty `data` list yields no records.
pub fn live_flights(body: &Value) -> Result<Vec<LiveFlightRecord>, ShapeError> {
    let Some(items) = data_items(body)? else {
        return Ok(Vec::new());
    };
    ensure_objects(items)?;
    Ok(items.iter().map(live_flight).collect())
}

/// Map a `cities` body to the weather of its first city.
///
/// `None` when the provider returned no cities.
pub fn weather(body: &Value) -> Result<Option<WeatherRecord>, ShapeError> {
    let Some(city) = data_items(body)?.and_then(|items| items.first()) else {
        return Ok(None);
    };
    if !city.is_object() {
        return Err(ShapeError::ItemNotObject {
            index: 0,
            found: type_name(city),
        });
    }

    Ok(Some(WeatherRecord {
        temperature: field_or_na(city, &["weather", "temperature"]),
        conditions: field_or_na(city, &["weather", "description"]),
        wind_speed: field_or_na(city, &["weather", "wind", "speed"]),
        humidity: field_or_na(city, &["weather", "humidity"]),
    }))
}

pub fn schedule(flight: &Value) -> ScheduleRecord {
    ScheduleRecord {
        flight_number: field_or_na(flight, &["flight", "iata"]),
        airline: field_or_na(flight, &["airline", "name"]),
        departure: object_or_empty(flight, "departure"),
        arrival: object_or_empty(flight, "arrival"),
    }
}

/// Map a `flights` body to today's schedule.
///
/// Returns `None` when the body has no `data` member at all. Items are kept
/// only if their own `flight_status` is `"scheduled"`, whatever filter the
/// request asked the provider to apply.
pub fn schedules(body: &Value) -> Result<Option<Vec<ScheduleRecord>>, ShapeError> {
    let Some(data) = body.get("data") else {
        return Ok(None);
    };
    let Value::Array(items) = data else {
        return Err(ShapeError::DataNotArray {
            found: type_name(data),
        });
    };
    ensure_objects(items)?;

    let records = items
        .iter()
        .filter(|flight| {
            flight.get("flight_status").and_then(Value::as_str) == Some(SCHEDULED_STATUS)
        })
        .map(schedule)
        .collect();
    Ok(Some(records))
}
