//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use gallery_core::models;

/// Returns the OpenAPI document for the gallery API.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery API",
        version = "0.1.0",
        description = "Media gallery catalog: filtered listing and search of images and videos, plus item administration."
    ),
    paths(
        handlers::gallery::list_gallery,
        handlers::gallery::list_categories,
        handlers::gallery::get_gallery_item,
        handlers::gallery::create_gallery_item,
        handlers::gallery::update_gallery_item,
        handlers::gallery::delete_gallery_item,
    ),
    components(schemas(
        models::GalleryItem,
        models::NewGalleryItem,
        models::UpdateGalleryItem,
        error::ErrorResponse,
    )),
    tags(
        (name = "gallery", description = "Public gallery queries"),
        (name = "admin", description = "Gallery item administration")
    )
)]
pub struct ApiDoc;
