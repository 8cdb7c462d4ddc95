//! SkyRelay Server - airport catalog and aviationstack relay

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyrelay_server::api;
use skyrelay_server::config::Config;
use skyrelay_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // An explicit env file, or a `.env` found from the working directory.
    let (config, env_file) = match std::env::var("SKYRELAY_ENV_FILE") {
        Ok(path) => {
            let path = PathBuf::from(path);
            (Config::from_env_file(&path)?, Some(path))
        }
        Err(_) => {
            let found = dotenvy::dotenv().ok();
            (Config::from_env(), found)
        }
    };

    // Initialize tracing
    let json_logs = config.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skyrelay_server=debug".parse()?)
                .add_directive("skyrelay_core=info".parse()?)
                .add_directive("skyrelay_aviation=info".parse()?),
        )
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!("Starting SkyRelay Server...");
    if let Some(path) = &env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }
    if config.aviation.access_key.is_none() {
        tracing::warn!(
            "AVIATION_STACK_API_KEY is not set; flight, weather and schedule queries will fail"
        );
    }
    tracing::info!("Airport dataset: {}", config.airports_csv.display());

    let addr = SocketAddr::new(config.bind_addr, config.server_port);
    let state = Arc::new(AppState::new(config)?);
    let app = api::app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
