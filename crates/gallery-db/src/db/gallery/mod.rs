//! Gallery item and user storage
//!
//! `GalleryStore` is the seam between the HTTP layer and the backing store.
//! PostgreSQL is the production backend; the in-memory backend mirrors it for
//! tests and local runs without a database.

mod memory;
mod postgres;
pub mod seed;
mod store;

use std::sync::Arc;

use gallery_core::{AppError, Config, StoreBackend};
use sqlx::PgPool;

pub use memory::InMemoryGalleryStore;
pub use postgres::PostgresGalleryStore;
pub use seed::{initialize, seed_items, SeedOutcome};
pub use store::GalleryStore;

/// Factory function to create the gallery store selected by configuration
pub fn create_gallery_store(
    config: &Config,
    postgres_pool: Option<PgPool>,
) -> Result<Arc<dyn GalleryStore>, AppError> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool = postgres_pool.ok_or_else(|| {
                AppError::Internal(
                    "postgres store backend selected but no connection pool was provided"
                        .to_string(),
                )
            })?;
            tracing::info!("Initializing PostgreSQL gallery store");
            Ok(Arc::new(PostgresGalleryStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Initializing in-memory gallery store; data is lost on restart");
            Ok(Arc::new(InMemoryGalleryStore::new()))
        }
    }
}
