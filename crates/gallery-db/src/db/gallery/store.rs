use gallery_core::models::{GalleryItem, NewGalleryItem, NewUser, UpdateGalleryItem, User};
use gallery_core::{AppError, GalleryFilter};

/// Trait for gallery store operations
/// This abstracts the backing store (PostgreSQL in production, memory in tests)
///
/// Every call re-reads the backing store; nothing is cached between calls.
#[async_trait::async_trait]
pub trait GalleryStore: Send + Sync {
    /// Every item, in insertion (id) order.
    async fn get_all_gallery_items(&self) -> Result<Vec<GalleryItem>, AppError>;

    async fn get_gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, AppError>;

    async fn get_gallery_items_by_type(&self, item_type: &str)
        -> Result<Vec<GalleryItem>, AppError>;

    async fn get_featured_items(&self) -> Result<Vec<GalleryItem>, AppError>;

    /// Case-insensitive substring match on title, description or category.
    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, AppError>;

    async fn get_gallery_item(&self, id: i32) -> Result<Option<GalleryItem>, AppError>;

    /// Distinct categories currently present, in order of first appearance.
    async fn list_categories(&self) -> Result<Vec<String>, AppError>;

    async fn create_gallery_item(&self, item: NewGalleryItem) -> Result<GalleryItem, AppError>;

    /// `Ok(None)` when no row has `id`.
    async fn update_gallery_item(
        &self,
        id: i32,
        update: UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, AppError>;

    /// `Ok(false)` when no row had `id`; never an error for a missing row.
    async fn delete_gallery_item(&self, id: i32) -> Result<bool, AppError>;

    /// Bounded existence probe used by seeding.
    async fn has_any_items(&self) -> Result<bool, AppError>;

    /// Insert many items with a single batch statement.
    async fn insert_gallery_items(&self, items: Vec<NewGalleryItem>) -> Result<u64, AppError>;

    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Fails with `AppError::Conflict` when the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;

    /// Cheap round trip for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;

    /// Run the query a resolved listing filter stands for.
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>, AppError> {
        match filter {
            GalleryFilter::Search(query) => self.search_gallery_items(query).await,
            GalleryFilter::Featured => self.get_featured_items().await,
            GalleryFilter::Type(item_type) => self.get_gallery_items_by_type(item_type).await,
            GalleryFilter::Category(category) => {
                self.get_gallery_items_by_category(category).await
            }
            GalleryFilter::All => self.get_all_gallery_items().await,
        }
    }
}
