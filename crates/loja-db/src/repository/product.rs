//! # Product Repository
//!
//! Database operations for products.
//!
//! ## What This Layer Does NOT Do
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products row                                                          │
//! │                                                                         │
//! │  name, brand, cost_price_cents, sale_price_cents, active               │
//! │      ▲ written by create / update                                      │
//! │                                                                         │
//! │  category_id = 1, supplier_id = 1                                      │
//! │      ▲ placeholders, written by create only; no relation is checked    │
//! │                                                                         │
//! │  profit_margin                                                         │
//! │      ▲ read by list / get, NEVER written here                          │
//! │        (see Product::computed_margin for the derived value)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use loja_core::{Product, ProductInput, PLACEHOLDER_CATEGORY_ID, PLACEHOLDER_SUPPLIER_ID};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let input = ProductInput::new("Sutiã", "39.90".parse()?, "79.90".parse()?);
/// let id = repo.create(&input).await?;
/// let product = repo.get(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product and returns its generated id.
    ///
    /// Category and supplier columns receive the fixed placeholders.
    pub async fn create(&self, input: &ProductInput) -> DbResult<i64> {
        debug!(
            name = %input.name,
            cost_cents = input.cost_price.cents(),
            sale_cents = input.sale_price.cents(),
            "Inserting product"
        );

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                name, brand, cost_price_cents, sale_price_cents, active,
                category_id, supplier_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&input.name)
        .bind(input.brand_value())
        .bind(input.cost_price.cents())
        .bind(input.sale_price.cents())
        .bind(input.active)
        .bind(PLACEHOLDER_CATEGORY_ID)
        .bind(PLACEHOLDER_SUPPLIER_ID)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.pool.acquire().await?;
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, name, brand, cost_price_cents, sale_price_cents,
                active, profit_margin, created_at
            FROM products
            ORDER BY name, id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        let mut conn = self.pool.acquire().await?;
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, name, brand, cost_price_cents, sale_price_cents,
                active, profit_margin, created_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(product)
    }

    /// Replaces every writable field of product `id`.
    ///
    /// Placeholders and `profit_margin` are left as they are. Returns `false`
    /// when no row has that id.
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<bool> {
        debug!(id, name = %input.name, "Updating product");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                brand = ?3,
                cost_price_cents = ?4,
                sale_price_cents = ?5,
                active = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.brand_value())
        .bind(input.cost_price.cents())
        .bind(input.sale_price.cents())
        .bind(input.active)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard-deletes product `id`. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
