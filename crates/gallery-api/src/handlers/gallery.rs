//! Gallery handlers
//!
//! Read endpoints live under `/api/gallery`; mutations under `/api/admin/gallery`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use gallery_core::models::{GalleryItem, NewGalleryItem, UpdateGalleryItem};
use gallery_core::{AppError, GalleryQuery};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

fn parse_item_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid gallery item id: {}", raw)))
}

/// List gallery items
///
/// At most one filter is applied: `search`, then `featured=true`, then `type`,
/// then `category`. `all` disables the `type`/`category` facets.
#[utoipa::path(
    get,
    path = "/api/gallery",
    params(GalleryQuery),
    responses(
        (status = 200, description = "Matching gallery items", body = Vec<GalleryItem>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "gallery"
)]
#[tracing::instrument(skip(state))]
pub async fn list_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let filter = query.resolve();
    tracing::debug!(filter = ?filter, "Resolved gallery filter");

    let items = state.store.list_gallery_items(&filter).await?;
    Ok(Json(items))
}

/// List the distinct categories present in the gallery
#[utoipa::path(
    get,
    path = "/api/gallery/categories",
    responses(
        (status = 200, description = "Categories in order of first appearance", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "gallery"
)]
#[tracing::instrument(skip(state))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// Get a gallery item by id
#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    params(
        ("id" = i32, Path, description = "Gallery item id")
    ),
    responses(
        (status = 200, description = "Gallery item", body = GalleryItem),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Gallery item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "gallery"
)]
#[tracing::instrument(skip(state))]
pub async fn get_gallery_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_item_id(&id)?;

    let item = state
        .store
        .get_gallery_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))?;

    Ok(Json(item))
}

/// Create a gallery item
#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    request_body = NewGalleryItem,
    responses(
        (status = 201, description = "Gallery item created", body = GalleryItem),
        (status = 400, description = "Invalid request - validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "admin"
)]
#[tracing::instrument(skip(state, item), fields(title = %item.title, category = %item.category))]
pub async fn create_gallery_item(
    State(state): State<Arc<AppState>>,
    ValidatedJson(item): ValidatedJson<NewGalleryItem>,
) -> Result<impl IntoResponse, HttpAppError> {
    let created = state.store.create_gallery_item(item).await?;
    tracing::info!(id = created.id, "Gallery item created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a gallery item; only the fields present in the body are changed
#[utoipa::path(
    put,
    path = "/api/admin/gallery/{id}",
    params(
        ("id" = i32, Path, description = "Gallery item id")
    ),
    request_body = UpdateGalleryItem,
    responses(
        (status = 200, description = "Updated gallery item", body = GalleryItem),
        (status = 400, description = "Invalid request - validation failed", body = ErrorResponse),
        (status = 404, description = "Gallery item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "admin"
)]
#[tracing::instrument(skip(state, update))]
pub async fn update_gallery_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(update): ValidatedJson<UpdateGalleryItem>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_item_id(&id)?;

    let updated = state
        .store
        .update_gallery_item(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))?;

    Ok(Json(updated))
}

/// Delete a gallery item
///
/// Answers 204 whether or not the item existed.
#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{id}",
    params(
        ("id" = i32, Path, description = "Gallery item id")
    ),
    responses(
        (status = 204, description = "Gallery item deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "admin"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_gallery_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_item_id(&id)?;

    if !state.store.delete_gallery_item(id).await? {
        tracing::debug!(id, "Delete requested for missing gallery item");
    }

    Ok(StatusCode::NO_CONTENT)
}
