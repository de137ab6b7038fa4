//! Application state shared by every handler.

use gallery_core::Config;
use gallery_db::GalleryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GalleryStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn GalleryStore>, config: Config) -> Self {
        Self { store, config }
    }
}
