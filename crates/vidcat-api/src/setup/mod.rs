//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::{AppState, MediaState};
use anyhow::{Context, Result};
use std::sync::Arc;
use vidcat_core::config::log_format_from_env;
use vidcat_core::Config;
use vidcat_processing::MediaValidator;

/// Initialize the entire application
pub async fn initialize_app() -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first so configuration errors are logged
    crate::telemetry::init_telemetry(log_format_from_env())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    let config = Config::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))
        .context("Failed to load configuration")?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    build_app(config).await
}

/// Build state and routes without touching global telemetry.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    let store = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        media: MediaState {
            store,
            validator: MediaValidator::default(),
        },
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
