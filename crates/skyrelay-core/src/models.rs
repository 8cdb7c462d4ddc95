//! Client-facing data models for the SkyRelay API.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Placeholder shown in place of any field the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Safety rating reported for every airport. Placeholder data.
pub const DEFAULT_SAFETY_RATING: f64 = 95.0;

/// Failure rate reported for every airport. Placeholder data.
pub const DEFAULT_FAILURE_RATE: f64 = 0.003;

/// An airport with scheduled service, projected from the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    /// IATA code, never empty.
    pub code: String,
    pub name: String,
    /// `"{municipality}, {region}"`
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub safety_rating: f64,
    pub failure_rate: f64,
}

/// Whole values go out as integers: `95`, not `95.0`.
fn serialize_whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A flight currently in the air between two airports.
///
/// Every field holds the provider's scalar value (string or number), or
/// [`NOT_AVAILABLE`] when the provider omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveFlightRecord {
    pub flight_number: Value,
    pub airline: Value,
    pub status: Value,
    pub departure_time: Value,
    pub arrival_time: Value,
    pub delay: Value,
}

/// Current weather for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: Value,
    pub conditions: Value,
    pub wind_speed: Value,
    pub humidity: Value,
}

/// A flight scheduled for today.
///
/// `departure` and `arrival` are the provider's objects, passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub flight_number: Value,
    pub airline: Value,
    pub departure: Value,
    pub arrival: Value,
}

/// `{ "data": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct LiveFlightsResponse {
    pub data: Vec<LiveFlightRecord>,
}

/// Schedules response; `message` is only set when the provider had nothing usable.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulesResponse {
    pub data: Vec<ScheduleRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SchedulesResponse {
    pub fn found(data: Vec<ScheduleRecord>) -> Self {
        let total = data.len();
        Self {
            data,
            total: Some(total),
            message: None,
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            total: None,
            message: Some(message.into()),
        }
    }
}

pub(crate) fn not_available() -> Value {
    Value::String(NOT_AVAILABLE.to_string())
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(safety_rating: f64) -> AirportRecord {
        AirportRecord {
            code: "GOI".to_string(),
            name: "Dabolim Airport".to_string(),
            location: "Vasco da Gama, Goa".to_string(),
            latitude: 15.3808,
            longitude: 73.8314,
            safety_rating,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }

    #[test]
    fn safety_rating_serializes_as_integer() {
        let text = serde_json::to_string(&airport(DEFAULT_SAFETY_RATING)).unwrap();
        assert!(text.contains(r#""safetyRating":95,"#), "{text}");
        assert!(text.contains(r#""failureRate":0.003"#), "{text}");
    }

    #[test]
    fn fractional_safety_rating_keeps_its_decimals() {
        let text = serde_json::to_string(&airport(87.5)).unwrap();
        assert!(text.contains(r#""safetyRating":87.5"#), "{text}");
    }

    #[test]
    fn integer_safety_rating_reads_back() {
        let record: AirportRecord = serde_json::from_str(
            r#"{"code":"GOI","name":"Dabolim Airport","location":"Vasco da Gama, Goa",
                "latitude":15.3808,"longitude":73.8314,"safetyRating":95,"failureRate":0.003}"#,
        )
        .unwrap();
        assert_eq!(record, airport(DEFAULT_SAFETY_RATING));
    }
}
