//! Shared library surface for the SkyRelay server and its tests.

pub mod api;
pub mod config;
pub mod state;
