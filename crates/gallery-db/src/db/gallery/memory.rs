use gallery_core::models::{GalleryItem, NewGalleryItem, NewUser, UpdateGalleryItem, User};
use gallery_core::AppError;
use tokio::sync::RwLock;

use super::store::GalleryStore;

#[derive(Debug, Default)]
struct MemoryState {
    // Kept in ascending id order; ids are never reused.
    items: Vec<GalleryItem>,
    users: Vec<User>,
    last_item_id: i32,
    last_user_id: i32,
}

impl MemoryState {
    fn next_item_id(&mut self) -> i32 {
        self.last_item_id += 1;
        self.last_item_id
    }

    fn next_user_id(&mut self) -> i32 {
        self.last_user_id += 1;
        self.last_user_id
    }
}

/// Process-local gallery store with the same observable behavior as
/// [`PostgresGalleryStore`](super::PostgresGalleryStore). Used by tests and
/// `STORE_BACKEND=memory`; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryGalleryStore {
    state: RwLock<MemoryState>,
}

impl InMemoryGalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<GalleryItem>
    where
        F: Fn(&GalleryItem) -> bool,
    {
        let state = self.state.read().await;
        state
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl GalleryStore for InMemoryGalleryStore {
    async fn get_all_gallery_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn get_gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, AppError> {
        Ok(self.filtered(|item| item.category == category).await)
    }

    async fn get_gallery_items_by_type(
        &self,
        item_type: &str,
    ) -> Result<Vec<GalleryItem>, AppError> {
        Ok(self.filtered(|item| item.item_type == item_type).await)
    }

    async fn get_featured_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        Ok(self.filtered(|item| item.featured).await)
    }

    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, AppError> {
        let needle = query.to_lowercase();
        Ok(self
            .filtered(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .await)
    }

    async fn get_gallery_item(&self, id: i32) -> Result<Option<GalleryItem>, AppError> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.read().await;
        let mut categories: Vec<String> = Vec::new();
        for item in &state.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        Ok(categories)
    }

    async fn create_gallery_item(&self, item: NewGalleryItem) -> Result<GalleryItem, AppError> {
        let mut state = self.state.write().await;
        let id = state.next_item_id();
        let created = item.into_item(id);
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update_gallery_item(
        &self,
        id: i32,
        update: UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, AppError> {
        let mut state = self.state.write().await;
        let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        update.apply_to(item);
        Ok(Some(item.clone()))
    }

    async fn delete_gallery_item(&self, id: i32) -> Result<bool, AppError> {
        let mut state = self.state.write().await;
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        Ok(state.items.len() < before)
    }

    async fn has_any_items(&self) -> Result<bool, AppError> {
        Ok(!self.state.read().await.items.is_empty())
    }

    async fn insert_gallery_items(&self, items: Vec<NewGalleryItem>) -> Result<u64, AppError> {
        let mut state = self.state.write().await;
        let count = items.len() as u64;
        for item in items {
            let id = state.next_item_id();
            state.items.push(item.into_item(id));
        }
        Ok(count)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict(
                "duplicate value violates users_username_key".to_string(),
            ));
        }
        let id = state.next_user_id();
        let created = user.into_user(id);
        state.users.push(created.clone());
        Ok(created)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::GalleryFilter;

    fn new_item(title: &str, category: &str, item_type: &str, featured: bool) -> NewGalleryItem {
        NewGalleryItem {
            title: title.to_string(),
            category: category.to_string(),
            item_type: item_type.to_string(),
            image: format!("https://example.com/{}.jpg", title.to_lowercase()),
            video_url: None,
            description: format!("{} description", title),
            height: "h-64".to_string(),
            featured,
            tags: None,
        }
    }

    async fn populated() -> InMemoryGalleryStore {
        let store = InMemoryGalleryStore::new();
        store
            .insert_gallery_items(vec![
                new_item("Sunset", "photography", "image", true),
                new_item("Mural", "art", "image", false),
                new_item("Timelapse", "photography", "video", false),
                new_item("Logo", "design", "image", true),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_never_reused() {
        let store = populated().await;
        assert!(store.delete_gallery_item(4).await.unwrap());

        let created = store
            .create_gallery_item(new_item("Poster", "design", "image", false))
            .await
            .unwrap();
        assert_eq!(created.id, 5);

        let ids: Vec<i32> = store
            .get_all_gallery_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[tokio::test]
    async fn filters_match_exactly() {
        let store = populated().await;

        let photos = store.get_gallery_items_by_category("photography").await.unwrap();
        assert_eq!(photos.len(), 2);
        assert!(store.get_gallery_items_by_category("Photography").await.unwrap().is_empty());

        let videos = store.get_gallery_items_by_type("video").await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Timelapse");

        let featured = store.get_featured_items().await.unwrap();
        assert_eq!(featured.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_three_fields() {
        let store = populated().await;

        assert_eq!(store.search_gallery_items("SUNSET").await.unwrap().len(), 1);
        // matches category
        assert_eq!(store.search_gallery_items("photo").await.unwrap().len(), 2);
        // matches description
        assert_eq!(store.search_gallery_items("logo desc").await.unwrap().len(), 1);
        assert!(store.search_gallery_items("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_dispatches_on_filter() {
        let store = populated().await;

        let all = store.list_gallery_items(&GalleryFilter::All).await.unwrap();
        assert_eq!(all.len(), 4);

        let art = store
            .list_gallery_items(&GalleryFilter::Category("art".to_string()))
            .await
            .unwrap();
        assert_eq!(art.len(), 1);
        assert_eq!(art[0].title, "Mural");
    }

    #[tokio::test]
    async fn categories_keep_first_seen_order() {
        let store = populated().await;
        assert_eq!(
            store.list_categories().await.unwrap(),
            vec!["photography", "art", "design"]
        );
    }

    #[tokio::test]
    async fn update_missing_item_returns_none() {
        let store = populated().await;
        let update = UpdateGalleryItem {
            title: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert!(store.update_gallery_item(99, update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_writes_only_present_fields() {
        let store = populated().await;
        let update = UpdateGalleryItem {
            featured: Some(true),
            tags: Some(Some(vec!["wall".to_string()])),
            ..Default::default()
        };

        let updated = store.update_gallery_item(2, update).await.unwrap().unwrap();
        assert!(updated.featured);
        assert_eq!(updated.tags, Some(vec!["wall".to_string()]));
        assert_eq!(updated.title, "Mural");
        assert_eq!(store.get_gallery_item(2).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = populated().await;
        assert!(store.delete_gallery_item(1).await.unwrap());
        assert!(!store.delete_gallery_item(1).await.unwrap());
        assert!(store.get_gallery_item(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = InMemoryGalleryStore::new();
        let admin = NewUser {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };

        let created = store.create_user(admin.clone()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(
            store.get_user_by_username("admin").await.unwrap(),
            Some(created.clone())
        );
        assert_eq!(store.get_user(1).await.unwrap(), Some(created));

        let err = store.create_user(admin).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn empty_store_reports_no_items() {
        let store = InMemoryGalleryStore::new();
        assert!(!store.has_any_items().await.unwrap());
        assert!(store.list_categories().await.unwrap().is_empty());
        assert_eq!(store.insert_gallery_items(Vec::new()).await.unwrap(), 0);
        assert!(!store.has_any_items().await.unwrap());
    }
}
