use gallery_core::models::{GalleryItem, NewGalleryItem, NewUser, UpdateGalleryItem, User};
use gallery_core::AppError;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::store::GalleryStore;

/// Escape LIKE metacharacters so user input matches literally.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// PostgreSQL-backed gallery store
#[derive(Clone)]
pub struct PostgresGalleryStore {
    pool: PgPool,
}

impl PostgresGalleryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GalleryStore for PostgresGalleryStore {
    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn get_all_gallery_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        let items = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn get_gallery_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryItem>, AppError> {
        let items = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn get_gallery_items_by_type(
        &self,
        item_type: &str,
    ) -> Result<Vec<GalleryItem>, AppError> {
        let items = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            WHERE type = $1
            ORDER BY id
            "#,
        )
        .bind(item_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn get_featured_items(&self) -> Result<Vec<GalleryItem>, AppError> {
        let items = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            WHERE featured
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "search"))]
    async fn search_gallery_items(&self, query: &str) -> Result<Vec<GalleryItem>, AppError> {
        let pattern = format!("%{}%", escape_like(query));

        let items = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            WHERE title ILIKE $1 ESCAPE '\'
               OR description ILIKE $1 ESCAPE '\'
               OR category ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select", db.record_id = %id))]
    async fn get_gallery_item(&self, id: i32) -> Result<Option<GalleryItem>, AppError> {
        let item = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            SELECT id, title, category, type, image, video_url, description, height, featured, tags
            FROM gallery_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        let categories = sqlx::query_scalar::<Postgres, String>(
            "SELECT category FROM gallery_items GROUP BY category ORDER BY MIN(id)",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    #[tracing::instrument(skip(self, item), fields(db.table = "gallery_items", db.operation = "insert"))]
    async fn create_gallery_item(&self, item: NewGalleryItem) -> Result<GalleryItem, AppError> {
        let created = sqlx::query_as::<Postgres, GalleryItem>(
            r#"
            INSERT INTO gallery_items (title, category, type, image, video_url, description, height, featured, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, category, type, image, video_url, description, height, featured, tags
            "#,
        )
        .bind(item.title)
        .bind(item.category)
        .bind(item.item_type)
        .bind(item.image)
        .bind(item.video_url)
        .bind(item.description)
        .bind(item.height)
        .bind(item.featured)
        .bind(item.tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[tracing::instrument(skip(self, update), fields(db.table = "gallery_items", db.operation = "update", db.record_id = %id))]
    async fn update_gallery_item(
        &self,
        id: i32,
        update: UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, AppError> {
        if update.is_empty() {
            return self.get_gallery_item(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE gallery_items SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(title) = update.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(category) = update.category {
                set.push("category = ").push_bind_unseparated(category);
            }
            if let Some(item_type) = update.item_type {
                set.push("type = ").push_bind_unseparated(item_type);
            }
            if let Some(image) = update.image {
                set.push("image = ").push_bind_unseparated(image);
            }
            if let Some(video_url) = update.video_url {
                set.push("video_url = ").push_bind_unseparated(video_url);
            }
            if let Some(description) = update.description {
                set.push("description = ").push_bind_unseparated(description);
            }
            if let Some(height) = update.height {
                set.push("height = ").push_bind_unseparated(height);
            }
            if let Some(featured) = update.featured {
                set.push("featured = ").push_bind_unseparated(featured);
            }
            if let Some(tags) = update.tags {
                set.push("tags = ").push_bind_unseparated(tags);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(
            " RETURNING id, title, category, type, image, video_url, description, height, featured, tags",
        );

        let updated = builder
            .build_query_as::<GalleryItem>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "delete", db.record_id = %id))]
    async fn delete_gallery_item(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "gallery_items", db.operation = "select"))]
    async fn has_any_items(&self) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM gallery_items LIMIT 1)",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[tracing::instrument(skip(self, items), fields(db.table = "gallery_items", db.operation = "insert", count = items.len()))]
    async fn insert_gallery_items(&self, items: Vec<NewGalleryItem>) -> Result<u64, AppError> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO gallery_items (title, category, type, image, video_url, description, height, featured, tags) ",
        );
        builder.push_values(items, |mut row, item| {
            row.push_bind(item.title)
                .push_bind(item.category)
                .push_bind(item.item_type)
                .push_bind(item.image)
                .push_bind(item.video_url)
                .push_bind(item.description)
                .push_bind(item.height)
                .push_bind(item.featured)
                .push_bind(item.tags);
        });

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select", db.record_id = %id))]
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<Postgres, User>(
            "SELECT id, username, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<Postgres, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self, user), fields(db.table = "users", db.operation = "insert", username = %user.username))]
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        // Unique violations surface as AppError::Conflict via From<sqlx::Error>
        let created = sqlx::query_as::<Postgres, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(user.username)
        .bind(user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<Postgres, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("Urban Landscape"), "Urban Landscape");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\path"), "c:\\\\path");
    }
}
