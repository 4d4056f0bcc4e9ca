//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## CPF Uniqueness
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Who enforces "one customer per CPF"?                                  │
//! │                                                                         │
//! │  CustomerRepository::create      → writes whatever it is given         │
//! │  customers.cpf                   → indexed, NOT unique                 │
//! │  BackOffice::register_customer   → find_by_cpf first, abort on a hit   │
//! │                                                                         │
//! │  Two registrations racing with the same CPF can both pass the lookup. │
//! │  That window is accepted.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use loja_core::{Customer, CustomerInput};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a customer and returns its generated id.
    ///
    /// Blank e-mail and phone are stored as NULL. The CPF is stored exactly
    /// as given and is not checked for duplicates.
    pub async fn create(&self, input: &CustomerInput) -> DbResult<i64> {
        debug!(name = %input.name, cpf = %input.cpf, "Inserting customer");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, cpf, email, phone, active)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&input.name)
        .bind(&input.cpf)
        .bind(input.email_value())
        .bind(input.phone_value())
        .bind(input.active)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Customer inserted");
        Ok(id)
    }

    /// Lists every customer ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let mut conn = self.pool.acquire().await?;
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, cpf, email, phone, active, created_at
            FROM customers
            ORDER BY name, id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by its ID.
    pub async fn get(&self, id: i64) -> DbResult<Option<Customer>> {
        let mut conn = self.pool.acquire().await?;
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, cpf, email, phone, active, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(customer)
    }

    /// Looks a customer up by CPF, compared exactly as stored.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - the matching customer; when duplicates exist
    ///   (written without going through `BackOffice`), the one with the
    ///   lowest id
    /// * `Ok(None)` - no customer has this CPF
    ///
    /// `"123.456.789-09"` and `"12345678909"` are different keys here.
    pub async fn find_by_cpf(&self, cpf: &str) -> DbResult<Option<Customer>> {
        debug!(cpf = %cpf, "Looking up customer by CPF");

        let mut conn = self.pool.acquire().await?;
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, cpf, email, phone, active, created_at
            FROM customers
            WHERE cpf = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(cpf)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(customer)
    }

    /// Replaces every writable field of customer `id`.
    ///
    /// Returns `false` when no row has that id.
    pub async fn update(&self, id: i64, input: &CustomerInput) -> DbResult<bool> {
        debug!(id, cpf = %input.cpf, "Updating customer");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?2, cpf = ?3, email = ?4, phone = ?5, active = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.cpf)
        .bind(input.email_value())
        .bind(input.phone_value())
        .bind(input.active)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard-deletes customer `id`. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting customer");

        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
