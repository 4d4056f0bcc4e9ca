//! # Category Repository
//!
//! Database operations for product categories.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use loja_core::{Category, CategoryInput};

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.categories();
///
/// let id = repo.create(&CategoryInput::new("Lingerie")).await?;
/// let categories = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Inserts a category and returns its generated id.
    ///
    /// `created_at` comes from the column default. A blank description is
    /// stored as NULL.
    pub async fn create(&self, input: &CategoryInput) -> DbResult<i64> {
        debug!(name = %input.name, "Inserting category");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO categories (name, description, active)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&input.name)
        .bind(input.description_value())
        .bind(input.active)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Category inserted");
        Ok(id)
    }

    /// Lists every category ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, active, created_at
            FROM categories
            ORDER BY name, id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Gets a category by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - Category not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, active, created_at
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(category)
    }

    /// Replaces every writable field of category `id`.
    ///
    /// Returns `false` when no row has that id; nothing is inserted.
    pub async fn update(&self, id: i64, input: &CategoryInput) -> DbResult<bool> {
        debug!(id, name = %input.name, "Updating category");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = ?2, description = ?3, active = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.description_value())
        .bind(input.active)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard-deletes category `id`. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting category");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all categories (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = test_db().await;
        let repo = db.categories();

        let input = CategoryInput::new("Lingerie").description("Peças íntimas");
        let id = repo.create(&input).await.unwrap();

        let category = repo.get(id).await.unwrap().unwrap();
        assert_eq!(category.id, id);
        assert_eq!(category.name, "Lingerie");
        assert_eq!(category.description.as_deref(), Some("Peças íntimas"));
        assert!(category.active);
    }

    #[tokio::test]
    async fn test_ids_are_fresh() {
        let db = test_db().await;
        let repo = db.categories();

        let first = repo.create(&CategoryInput::new("A")).await.unwrap();
        let second = repo.create(&CategoryInput::new("A")).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_blank_description_stored_as_null() {
        let db = test_db().await;
        let repo = db.categories();

        let id = repo
            .create(&CategoryInput::new("Pijamas").description(""))
            .await
            .unwrap();

        let stored: Option<String> =
            sqlx::query_scalar("SELECT description FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(stored, None);
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let db = test_db().await;
        let repo = db.categories();

        for name in ["Pijamas", "Body", "Meias"] {
            repo.create(&CategoryInput::new(name)).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Body", "Meias", "Pijamas"]);
    }

    #[tokio::test]
    async fn test_list_includes_inactive() {
        let db = test_db().await;
        let repo = db.categories();

        repo.create(&CategoryInput::new("Antiga").active(false))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].active);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let db = test_db().await;
        let repo = db.categories();

        let id = repo
            .create(&CategoryInput::new("Lingerie").description("old"))
            .await
            .unwrap();
        let before = repo.get(id).await.unwrap().unwrap();

        let changed = repo
            .update(id, &CategoryInput::new("Moda íntima").active(false))
            .await
            .unwrap();
        assert!(changed);

        let after = repo.get(id).await.unwrap().unwrap();
        assert_eq!(after.name, "Moda íntima");
        assert_eq!(after.description, None);
        assert!(!after.active);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_false() {
        let db = test_db().await;
        let repo = db.categories();

        let changed = repo.update(42, &CategoryInput::new("Ghost")).await.unwrap();
        assert!(!changed);
        assert!(repo.get(42).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.categories();

        let id = repo.create(&CategoryInput::new("Meias")).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.get(id).await.unwrap().is_none());
        // Second delete finds nothing
        assert!(!repo.delete(id).await.unwrap());
    }
}
