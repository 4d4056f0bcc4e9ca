//! # loja-core: Pure Domain Logic for the Loja Back Office
//!
//! This crate holds the record types and rules of the back office as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Loja Back Office Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Web Front End (out of workspace)                 │   │
//! │  │   Category forms ──► Product forms ──► Customer forms          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    cpf    │  │ validation│  │   │
//! │  │   │ Category  │  │   Money   │  │ is_valid  │  │  limits   │  │   │
//! │  │   │ Product   │  │  margin   │  │           │  │  checks   │  │   │
//! │  │   │ Customer  │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    loja-db (Database Layer)                     │   │
//! │  │         SQLite statements, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (Category, Product, Customer) and their inputs
//! - [`money`] - Money in integer cents, decimal parsing, profit margin
//! - [`cpf`] - Structural CPF check
//! - [`error`] - Domain error types
//! - [`validation`] - Field limits applied before writes
//!
//! ## Example Usage
//!
//! ```rust
//! use loja_core::money::{profit_margin, Money};
//! use loja_core::cpf::is_valid_cpf;
//!
//! let cost: Money = "10.00".parse().unwrap();
//! let sale: Money = "15,00".parse().unwrap();
//! assert_eq!(profit_margin(cost, sale), 50.0);
//!
//! assert!(is_valid_cpf("123.456.789-09"));
//! assert!(!is_valid_cpf("111.111.111-11"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cpf;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category reference written into every new product row.
///
/// The products table carries category and supplier columns, but this layer
/// does not model those relations. Every insert uses the same placeholder.
pub const PLACEHOLDER_CATEGORY_ID: i64 = 1;

/// Supplier reference written into every new product row.
pub const PLACEHOLDER_SUPPLIER_ID: i64 = 1;

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Maximum length of a product brand.
pub const MAX_BRAND_LEN: usize = 50;

/// Maximum length of a customer name.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Maximum length of a CPF as typed (`XXX.XXX.XXX-XX`).
pub const MAX_CPF_LEN: usize = 14;

/// Maximum length of a customer e-mail.
pub const MAX_EMAIL_LEN: usize = 100;

/// Maximum length of a customer phone number.
pub const MAX_PHONE_LEN: usize = 20;
