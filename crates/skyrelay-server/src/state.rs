//! Shared, read-only application state.

use anyhow::Result;
use skyrelay_aviation::AviationStackClient;

use crate::config::Config;

/// Everything a handler needs. Built once at startup and never mutated.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub aviation: AviationStackClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let aviation = AviationStackClient::new(&config.aviation)?;
        Ok(Self { config, aviation })
    }
}
