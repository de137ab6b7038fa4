//! Data models for the gallery service
//!
//! Row types returned by the store, and the request DTOs that are validated
//! before a write ever reaches it.

mod gallery_item;
mod user;

pub use gallery_item::*;
pub use user::*;
