//! Domain route groups.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn gallery_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/gallery", API_PREFIX),
            get(handlers::gallery::list_gallery),
        )
        .route(
            &format!("{}/gallery/categories", API_PREFIX),
            get(handlers::gallery::list_categories),
        )
        .route(
            &format!("{}/gallery/{{id}}", API_PREFIX),
            get(handlers::gallery::get_gallery_item),
        )
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/admin/gallery", API_PREFIX),
            post(handlers::gallery::create_gallery_item),
        )
        .route(
            &format!("{}/admin/gallery/{{id}}", API_PREFIX),
            put(handlers::gallery::update_gallery_item)
                .delete(handlers::gallery::delete_gallery_item),
        )
}
