//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use gallery_core::{Config, StoreBackend};

/// Fail fast on configuration that would break the service, warn on
/// configuration that is legal but probably unintended.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.store_backend() == StoreBackend::Memory {
        if config.is_production() {
            tracing::warn!(
                "In-memory store backend selected in production - all gallery data is lost on restart"
            );
        }
        if !config.seed_on_startup() {
            tracing::warn!("In-memory store backend with seeding disabled - gallery starts empty");
        }
    }

    if config.db_max_connections() > 100 {
        tracing::warn!(
            db_max_connections = config.db_max_connections(),
            "DB_MAX_CONNECTIONS is very high - ensure the database accepts this many connections"
        );
    }

    Ok(())
}
