use axum_test::TestServer;
use gallery_api::setup::routes::setup_routes;
use gallery_api::state::AppState;
use gallery_core::models::{GalleryItem, NewGalleryItem, NewUser, UpdateGalleryItem, User};
use gallery_core::{AppError, Config, GalleryConfig};
use gallery_db::{initialize, GalleryStore, InMemoryGalleryStore, SeedOutcome};
use std::sync::Arc;

/// Error text a broken store reports; it must never reach a response body.
pub const STORE_FAILURE: &str = "connection refused: password authentication failed for user gallery";

/// Test application backed by the in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryGalleryStore>,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    let config = GalleryConfig::from_source(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "SEED_ON_STARTUP" => Some("false".to_string()),
        _ => None,
    })
    .expect("Failed to build test configuration");
    Config(Box::new(config))
}

/// Build a test server over any store
pub fn test_server(store: Arc<dyn GalleryStore>) -> TestServer {
    let config = test_config();
    let state = Arc::new(AppState::new(store, config.clone()));

    let router = setup_routes(&config, state).expect("Failed to build routes");
    TestServer::new(router).expect("Failed to start test server")
}

/// Setup a test application with an empty gallery
pub async fn setup_empty_test_app() -> TestApp {
    let store = Arc::new(InMemoryGalleryStore::new());
    let server = test_server(store.clone() as Arc<dyn GalleryStore>);

    TestApp { server, store }
}

/// Setup a test application with the standard seed set loaded
pub async fn setup_test_app() -> TestApp {
    let app = setup_empty_test_app().await;
    let outcome = initialize(app.store.as_ref()).await;
    assert!(matches!(outcome, SeedOutcome::Seeded(_)));
    app
}

/// Store whose backend is down: every call fails.
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, AppError> {
    Err(AppError::Internal(STORE_FAILURE.to_string()))
}

#[async_trait::async_trait]
impl GalleryStore for UnavailableStore {
    async fn get_all_gallery_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        unavailable()
    }
    async fn get_gallery_items_by_category(&self, _: &str) -> Result<Vec<GalleryItem>, AppError> {
        unavailable()
    }
    async fn get_gallery_items_by_type(&self, _: &str) -> Result<Vec<GalleryItem>, AppError> {
        unavailable()
    }
    async fn get_featured_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        unavailable()
    }
    async fn search_gallery_items(&self, _: &str) -> Result<Vec<GalleryItem>, AppError> {
        unavailable()
    }
    async fn get_gallery_item(&self, _: i32) -> Result<Option<GalleryItem>, AppError> {
        unavailable()
    }
    async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        unavailable()
    }
    async fn create_gallery_item(&self, _: NewGalleryItem) -> Result<GalleryItem, AppError> {
        unavailable()
    }
    async fn update_gallery_item(
        &self,
        _: i32,
        _: UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, AppError> {
        unavailable()
    }
    async fn delete_gallery_item(&self, _: i32) -> Result<bool, AppError> {
        unavailable()
    }
    async fn has_any_items(&self) -> Result<bool, AppError> {
        unavailable()
    }
    async fn insert_gallery_items(&self, _: Vec<NewGalleryItem>) -> Result<u64, AppError> {
        unavailable()
    }
    async fn get_user(&self, _: i32) -> Result<Option<User>, AppError> {
        unavailable()
    }
    async fn get_user_by_username(&self, _: &str) -> Result<Option<User>, AppError> {
        unavailable()
    }
    async fn create_user(&self, _: NewUser) -> Result<User, AppError> {
        unavailable()
    }
    async fn ping(&self) -> Result<(), AppError> {
        unavailable()
    }
}
