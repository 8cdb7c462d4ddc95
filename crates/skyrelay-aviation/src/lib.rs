//! SkyRelay Aviation - aviationstack API client
//!
//! Handles all communication with the aviationstack REST API.

pub mod client;

pub use client::{AviationStackClient, AviationStackConfig, DEFAULT_BASE_URL};
