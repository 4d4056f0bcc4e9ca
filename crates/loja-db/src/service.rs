//! # Back Office Service
//!
//! The caller-side workflow that sits between the web forms and the
//! repositories.
//!
//! ## Register Customer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_customer(input)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_customer(input) ── Err ──► ServiceError::Validation          │
//! │       │                              (nothing written)                 │
//! │       ▼                                                                 │
//! │  customers().find_by_cpf(cpf) ── Some ──► ValidationError::Duplicate   │
//! │       │                                                                 │
//! │       ▼ None                                                            │
//! │  customers().create(input) ──► new id                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup and insert are two separate statements on two connections. A
//! concurrent registration can slip in between them.

use tracing::{info, warn};

use crate::error::ServiceResult;
use crate::pool::Database;
use loja_core::validation::{validate_category, validate_customer, validate_product};
use loja_core::{
    Category, CategoryInput, Customer, CustomerInput, Product, ProductInput, ValidationError,
};

/// Validating front door to the three repositories.
///
/// Holds only a [`Database`] handle, so it is cheap to clone into request
/// handlers.
#[derive(Debug, Clone)]
pub struct BackOffice {
    db: Database,
}

impl BackOffice {
    /// Creates a service over an open database.
    pub fn new(db: Database) -> Self {
        BackOffice { db }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn create_category(&self, input: &CategoryInput) -> ServiceResult<i64> {
        if let Err(e) = validate_category(input) {
            warn!(error = %e, "Rejected category");
            return Err(e.into());
        }

        let id = self.db.categories().create(input).await?;
        info!(id, name = %input.name, "Category created");
        Ok(id)
    }

    pub async fn update_category(&self, id: i64, input: &CategoryInput) -> ServiceResult<bool> {
        if let Err(e) = validate_category(input) {
            warn!(id, error = %e, "Rejected category update");
            return Err(e.into());
        }

        Ok(self.db.categories().update(id, input).await?)
    }

    pub async fn list_categories(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.db.categories().list().await?)
    }

    pub async fn get_category(&self, id: i64) -> ServiceResult<Option<Category>> {
        Ok(self.db.categories().get(id).await?)
    }

    pub async fn delete_category(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.db.categories().delete(id).await?)
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn create_product(&self, input: &ProductInput) -> ServiceResult<i64> {
        if let Err(e) = validate_product(input) {
            warn!(error = %e, "Rejected product");
            return Err(e.into());
        }

        let id = self.db.products().create(input).await?;
        info!(id, name = %input.name, "Product created");
        Ok(id)
    }

    pub async fn update_product(&self, id: i64, input: &ProductInput) -> ServiceResult<bool> {
        if let Err(e) = validate_product(input) {
            warn!(id, error = %e, "Rejected product update");
            return Err(e.into());
        }

        Ok(self.db.products().update(id, input).await?)
    }

    pub async fn list_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.db.products().list().await?)
    }

    pub async fn get_product(&self, id: i64) -> ServiceResult<Option<Product>> {
        Ok(self.db.products().get(id).await?)
    }

    pub async fn delete_product(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.db.products().delete(id).await?)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Validates and inserts a new customer.
    ///
    /// ## Errors
    /// - `ValidationError::Duplicate { field: "cpf", .. }` when a customer
    ///   with the exact same CPF string already exists
    /// - any field validation failure, before a single statement runs
    pub async fn register_customer(&self, input: &CustomerInput) -> ServiceResult<i64> {
        if let Err(e) = validate_customer(input) {
            warn!(error = %e, "Rejected customer");
            return Err(e.into());
        }

        let customers = self.db.customers();
        if let Some(existing) = customers.find_by_cpf(&input.cpf).await? {
            warn!(existing_id = existing.id, cpf = %input.cpf, "CPF already registered");
            return Err(ValidationError::duplicate("cpf", &input.cpf).into());
        }

        let id = customers.create(input).await?;
        info!(id, "Customer registered");
        Ok(id)
    }

    /// Validates and replaces customer `id`.
    ///
    /// Keeping the customer's own CPF is fine; taking another customer's CPF
    /// is a `Duplicate`. Returns `false` when `id` does not exist.
    pub async fn update_customer(&self, id: i64, input: &CustomerInput) -> ServiceResult<bool> {
        if let Err(e) = validate_customer(input) {
            warn!(id, error = %e, "Rejected customer update");
            return Err(e.into());
        }

        let customers = self.db.customers();
        if let Some(existing) = customers.find_by_cpf(&input.cpf).await? {
            if existing.id != id {
                warn!(id, existing_id = existing.id, "CPF belongs to another customer");
                return Err(ValidationError::duplicate("cpf", &input.cpf).into());
            }
        }

        Ok(customers.update(id, input).await?)
    }

    pub async fn list_customers(&self) -> ServiceResult<Vec<Customer>> {
        Ok(self.db.customers().list().await?)
    }

    pub async fn get_customer(&self, id: i64) -> ServiceResult<Option<Customer>> {
        Ok(self.db.customers().get(id).await?)
    }

    pub async fn find_customer_by_cpf(&self, cpf: &str) -> ServiceResult<Option<Customer>> {
        Ok(self.db.customers().find_by_cpf(cpf).await?)
    }

    pub async fn delete_customer(&self, id: i64) -> ServiceResult<bool> {
        Ok(self.db.customers().delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DbError, ServiceError};
    use crate::pool::DbConfig;
    use loja_core::Money;

    const CPF: &str = "123.456.789-09";

    async fn back_office() -> BackOffice {
        BackOffice::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn is_duplicate_cpf(err: &ServiceError) -> bool {
        matches!(
            err,
            ServiceError::Validation(ValidationError::Duplicate { field, .. }) if field == "cpf"
        )
    }

    #[tokio::test]
    async fn test_register_then_duplicate_rejected() {
        let office = back_office().await;

        let id = office
            .register_customer(&CustomerInput::new("Ana", CPF))
            .await
            .unwrap();

        let err = office
            .register_customer(&CustomerInput::new("Outra Ana", CPF))
            .await
            .unwrap_err();
        assert!(is_duplicate_cpf(&err));

        let all = office.list_customers().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }

    #[tokio::test]
    async fn test_differently_formatted_cpf_is_not_a_duplicate() {
        let office = back_office().await;

        office
            .register_customer(&CustomerInput::new("Ana", CPF))
            .await
            .unwrap();
        // Same digits, different string: the lookup compares exactly
        office
            .register_customer(&CustomerInput::new("Ana", "12345678909"))
            .await
            .unwrap();

        assert_eq!(office.list_customers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_cpf_writes_nothing() {
        let office = back_office().await;

        for bad in ["111.111.111-11", "123.456.789", ""] {
            let err = office
                .register_customer(&CustomerInput::new("Ana", bad))
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }

        assert_eq!(office.database().customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_customer_keeps_own_cpf() {
        let office = back_office().await;
        let id = office
            .register_customer(&CustomerInput::new("Ana", CPF))
            .await
            .unwrap();

        let changed = office
            .update_customer(id, &CustomerInput::new("Ana Souza", CPF).phone("11 99999-0000"))
            .await
            .unwrap();
        assert!(changed);

        let customer = office.get_customer(id).await.unwrap().unwrap();
        assert_eq!(customer.name, "Ana Souza");
        assert_eq!(customer.phone.as_deref(), Some("11 99999-0000"));
    }

    #[tokio::test]
    async fn test_update_customer_to_taken_cpf() {
        let office = back_office().await;
        office
            .register_customer(&CustomerInput::new("Ana", CPF))
            .await
            .unwrap();
        let bia = office
            .register_customer(&CustomerInput::new("Bia", "987.654.321-00"))
            .await
            .unwrap();

        let err = office
            .update_customer(bia, &CustomerInput::new("Bia", CPF))
            .await
            .unwrap_err();
        assert!(is_duplicate_cpf(&err));

        let unchanged = office.get_customer(bia).await.unwrap().unwrap();
        assert_eq!(unchanged.cpf, "987.654.321-00");
    }

    #[tokio::test]
    async fn test_update_missing_customer_returns_false() {
        let office = back_office().await;

        let changed = office
            .update_customer(77, &CustomerInput::new("Ana", CPF))
            .await
            .unwrap();
        assert!(!changed);
    }

    #[tokio::test]
    async fn test_category_rules() {
        let office = back_office().await;

        let err = office
            .create_category(&CategoryInput::new("  "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Required { .. })
        ));

        let id = office
            .create_category(&CategoryInput::new("Lingerie"))
            .await
            .unwrap();
        let err = office
            .update_category(id, &CategoryInput::new("L".repeat(51)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::TooLong { max: 50, .. })
        ));

        assert_eq!(office.get_category(id).await.unwrap().unwrap().name, "Lingerie");
        assert!(office.delete_category(id).await.unwrap());
        assert!(office.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_rules() {
        let office = back_office().await;

        let negative = ProductInput::new("Robe", Money::from_cents(-1), Money::from_cents(100));
        assert!(office.create_product(&negative).await.is_err());
        assert!(office.list_products().await.unwrap().is_empty());

        let input = ProductInput::new("Robe", Money::from_cents(2000), Money::from_cents(4500));
        let id = office.create_product(&input).await.unwrap();

        let product = office.get_product(id).await.unwrap().unwrap();
        assert_eq!(product.computed_margin(), 125.0);
        assert_eq!(product.profit_margin, None);

        assert!(office.delete_product(id).await.unwrap());
        assert!(!office.delete_product(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_errors_pass_through() {
        let office = back_office().await;
        office.database().close().await;

        let err = office.list_customers().await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Database(DbError::ConnectionFailed(_))
        ));
    }
}
