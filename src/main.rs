//! HTTP server entry point for the Shift Payroll Engine.

use std::env;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the configuration directory.
const CONFIG_DIR_ENV: &str = "SHIFT_PAYROLL_CONFIG";

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the log filter from `RUST_LOG`, e.g. `RUST_LOG=shift_payroll=debug`.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let config_dir = env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.config().server.bind_address.clone();

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(address = %bind_address, config_dir = %config_dir, "Shift payroll API listening");
    axum::serve(listener, router).await?;

    Ok(())
}
