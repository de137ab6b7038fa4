use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Item type for still images (the default).
pub const ITEM_TYPE_IMAGE: &str = "image";
/// Item type for videos; these also carry a `videoUrl`.
pub const ITEM_TYPE_VIDEO: &str = "video";
/// Layout hint applied when none is given.
pub const DEFAULT_HEIGHT: &str = "h-64";

const ITEM_TYPES: [&str; 2] = [ITEM_TYPE_IMAGE, ITEM_TYPE_VIDEO];

/// A displayable media entry in the gallery.
///
/// `image` is always present: for videos it is the poster/thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i32,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub item_type: String,
    pub image: String,
    pub video_url: Option<String>,
    pub description: String,
    pub height: String,
    pub featured: bool,
    pub tags: Option<Vec<String>>,
}

fn default_item_type() -> String {
    ITEM_TYPE_IMAGE.to_string()
}

fn default_height() -> String {
    DEFAULT_HEIGHT.to_string()
}

fn validate_item_type(value: &str) -> Result<(), ValidationError> {
    if ITEM_TYPES.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("item_type");
        err.message = Some("type must be one of: image, video".into());
        Err(err)
    }
}

/// Insert shape for a gallery item; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Category must be between 1 and 50 characters"
    ))]
    pub category: String,
    #[serde(rename = "type", default = "default_item_type")]
    #[validate(custom(function = "validate_item_type"))]
    pub item_type: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default = "default_height")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Height must be between 1 and 20 characters"
    ))]
    pub height: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewGalleryItem {
    /// Materialize the row the store would persist under `id`.
    pub fn into_item(self, id: i32) -> GalleryItem {
        GalleryItem {
            id,
            title: self.title,
            category: self.category,
            item_type: self.item_type,
            image: self.image,
            video_url: self.video_url,
            description: self.description,
            height: self.height,
            featured: self.featured,
            tags: self.tags,
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Accepts a present value but rejects an explicit `null`; absence falls back to `None`.
fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_update_type(update: &UpdateGalleryItem) -> Result<(), ValidationError> {
    match update.item_type.as_deref() {
        Some(value) => validate_item_type(value),
        None => Ok(()),
    }
}

/// Partial update; only the fields present are written.
///
/// Columns that cannot be empty reject `null`; `videoUrl` and `tags` accept it to clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_type"))]
pub struct UpdateGalleryItem {
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Category must be between 1 and 50 characters"
    ))]
    pub category: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, message = "Image URL cannot be empty"))]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub video_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Height must be between 1 and 20 characters"
    ))]
    pub height: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub featured: Option<bool>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Option<Vec<String>>>,
}

impl UpdateGalleryItem {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.item_type.is_none()
            && self.image.is_none()
            && self.video_url.is_none()
            && self.description.is_none()
            && self.height.is_none()
            && self.featured.is_none()
            && self.tags.is_none()
    }

    /// Apply the present fields to `item`, leaving the rest untouched.
    pub fn apply_to(&self, item: &mut GalleryItem) {
        if let Some(ref title) = self.title {
            item.title = title.clone();
        }
        if let Some(ref category) = self.category {
            item.category = category.clone();
        }
        if let Some(ref item_type) = self.item_type {
            item.item_type = item_type.clone();
        }
        if let Some(ref image) = self.image {
            item.image = image.clone();
        }
        if let Some(ref video_url) = self.video_url {
            item.video_url = video_url.clone();
        }
        if let Some(ref description) = self.description {
            item.description = description.clone();
        }
        if let Some(ref height) = self.height {
            item.height = height.clone();
        }
        if let Some(featured) = self.featured {
            item.featured = featured;
        }
        if let Some(ref tags) = self.tags {
            item.tags = tags.clone();
        }
    }
}
