//! Gallery API Library
//!
//! HTTP handlers, middleware and application setup for the gallery service.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
mod telemetry;

pub mod error;
pub mod setup;
pub mod state;

pub use error::ErrorResponse;
