//! Gallery Core Library
//!
//! This crate provides the domain models, filter resolution, error types and
//! configuration shared by the gallery store and the HTTP layer.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod store_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, GalleryConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use filter::{GalleryFilter, GalleryQuery};
pub use store_types::StoreBackend;
