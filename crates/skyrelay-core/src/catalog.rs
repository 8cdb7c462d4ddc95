//! Airport catalog loaded from the reference CSV dataset.
//!
//! The dataset is read in full on every call. Only large and medium airports
//! with scheduled service and an IATA code make it into the catalog.

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::models::{AirportRecord, DEFAULT_FAILURE_RATE, DEFAULT_SAFETY_RATING};

const SERVED_AIRPORT_TYPES: [&str; 2] = ["large_airport", "medium_airport"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read airport dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse airport dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidCoordinate {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// One row of the dataset, restricted to the columns the catalog uses.
#[derive(Debug, Deserialize)]
struct AirportRow {
    #[serde(rename = "type")]
    airport_type: String,
    name: String,
    latitude_deg: String,
    longitude_deg: String,
    scheduled_service: String,
    iata_code: Option<String>,
    municipality: String,
    region_name: String,
}

impl AirportRow {
    fn is_served(&self) -> bool {
        SERVED_AIRPORT_TYPES.contains(&self.airport_type.as_str())
            && is_truthy_flag(&self.scheduled_service)
    }

    fn iata(&self) -> Option<&str> {
        self.iata_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Accepts the numeric (`1`, `1.0`) and textual (`yes`, `true`) spellings of the flag.
fn is_truthy_flag(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true") {
        return true;
    }
    value.parse::<f64>().map(|v| v == 1.0).unwrap_or(false)
}

fn parse_coordinate(line: usize, field: &'static str, raw: &str) -> Result<f64, CatalogError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CatalogError::InvalidCoordinate {
            line,
            field,
            value: raw.to_string(),
        })
}

/// Parse and filter the dataset from any reader, preserving row order.
///
/// A malformed coordinate on a retained row fails the whole read.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<AirportRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut airports = Vec::new();
    for (index, result) in csv_reader.deserialize::<AirportRow>().enumerate() {
        let row = result?;
        // header is line 1
        let line = index + 2;

        if !row.is_served() {
            continue;
        }
        let Some(code) = row.iata() else {
            continue;
        };

        airports.push(AirportRecord {
            code: code.to_string(),
            name: row.name.clone(),
            location: format!("{}, {}", row.municipality, row.region_name),
            latitude: parse_coordinate(line, "latitude_deg", &row.latitude_deg)?,
            longitude: parse_coordinate(line, "longitude_deg", &row.longitude_deg)?,
            safety_rating: DEFAULT_SAFETY_RATING,
            failure_rate: DEFAULT_FAILURE_RATE,
        });
    }

    Ok(airports)
}

/// Read the catalog from `path`.
pub fn try_load_airports(path: &Path) -> Result<Vec<AirportRecord>, CatalogError> {
    let file = File::open(path)?;
    read_airports(BufReader::new(file))
}

/// Read the catalog from `path`, degrading to an empty list on any failure.
///
/// The cause is logged; callers never see an error.
pub fn load_airports(path: &Path) -> Vec<AirportRecord> {
    match try_load_airports(path) {
        Ok(airports) => {
            tracing::debug!("Loaded {} airports from {}", airports.len(), path.display());
            airports
        }
        Err(e) => {
            tracing::error!("Error loading airports from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
