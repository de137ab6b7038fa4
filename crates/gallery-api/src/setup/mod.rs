//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded `Config` to a ready `Router`.

pub mod database;
pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use gallery_core::{Config, StoreBackend};
use gallery_db::{create_gallery_store, SeedOutcome};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let pool = match config.store_backend() {
        StoreBackend::Postgres => Some(database::setup_database(&config).await?),
        StoreBackend::Memory => None,
    };

    let store = create_gallery_store(&config, pool)?;

    if config.seed_on_startup() {
        match gallery_db::initialize(store.as_ref()).await {
            SeedOutcome::Failed => {
                tracing::warn!("Seeding failed; continuing with the current gallery contents")
            }
            outcome => tracing::debug!(outcome = ?outcome, "Seeding finished"),
        }
    }

    let state = Arc::new(AppState::new(store, config.clone()));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
