//! # loja-db: Data Access Layer for the Loja Back Office
//!
//! This crate provides database access for the store back office.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Back Office Data Flow                               │
//! │                                                                         │
//! │  Web handler (form submit / list page)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     loja-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  BackOffice   │───►│  Repositories │    │  Migrations  │  │   │
//! │  │   │ (service.rs)  │    │               │    │  (embedded)  │  │   │
//! │  │   │ validation    │    │ CategoryRepo  │    │ 001_initial  │  │   │
//! │  │   │ CPF lookup    │    │ ProductRepo   │    │   _schema    │  │   │
//! │  │   └───────────────┘    │ CustomerRepo  │    └──────────────┘  │   │
//! │  │                        └───────┬───────┘                       │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │   Database    │                       │   │
//! │  │                        │   (pool.rs)   │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file ($LOJA_DB_PATH, default ./loja.db)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database, service and config error types
//! - [`repository`] - Category, product and customer repositories
//! - [`service`] - Validating [`BackOffice`] workflow
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loja_core::CustomerInput;
//! use loja_db::{BackOffice, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let office = BackOffice::new(db.clone());
//!
//! let id = office
//!     .register_customer(&CustomerInput::new("Ana Souza", "123.456.789-09"))
//!     .await?;
//!
//! let customer = db.customers().find_by_cpf("123.456.789-09").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError, DbResult, ServiceError, ServiceResult};
pub use pool::{Database, DbConfig};
pub use service::BackOffice;

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::customer::CustomerRepository;
pub use repository::product::ProductRepository;
