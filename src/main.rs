//! Staffing engine HTTP server.
//!
//! Reads `STAFFING_CONFIG_DIR` (default `./config`) and
//! `STAFFING_BIND_ADDR` (default `127.0.0.1:3000`). Log output is
//! controlled with `RUST_LOG`.

use std::env;
use std::error::Error;

use staffing_engine::api::{AppState, create_router};
use staffing_engine::config::ConfigLoader;
use staffing_engine::store::InMemoryRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("STAFFING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("STAFFING_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let state = AppState::new(config, InMemoryRepository::new());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, config_dir = %config_dir, "Staffing engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
