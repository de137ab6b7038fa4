//! Database repositories for data access layer
//
// Gallery items, users and seeding
pub mod gallery;

pub use gallery::{
    create_gallery_store, initialize, seed_items, GalleryStore, InMemoryGalleryStore,
    PostgresGalleryStore, SeedOutcome,
};
