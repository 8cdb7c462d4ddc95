//! SkyRelay core: airport catalog and aviationstack response shaping.

pub mod catalog;
pub mod models;
pub mod shaping;

pub use catalog::{load_airports, read_airports, try_load_airports, CatalogError};
pub use models::{
    AirportRecord, LiveFlightRecord, LiveFlightsResponse, ScheduleRecord, SchedulesResponse,
    WeatherRecord, NOT_AVAILABLE,
};
pub use shaping::ShapeError;
