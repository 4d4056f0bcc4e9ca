//! # Domain Types
//!
//! Records handed to and from the back office repositories.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │     Product     │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name           │   │  name, brand    │   │  name, cpf      │       │
//! │  │  description    │   │  cost / sale    │   │  email, phone   │       │
//! │  │  active         │   │  profit_margin  │   │  active         │       │
//! │  │  created_at     │   │  created_at     │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Inputs (no id, no timestamp): CategoryInput, ProductInput,            │
//! │  CustomerInput. The same input serves create and update.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by SQLite on insert and never changes. `created_at` is
//! filled by a column default and never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{profit_margin, Money};

/// Collapses an empty string into `None`.
///
/// Optional text columns store SQL NULL rather than `''` when the form field
/// was left blank. Whitespace is kept as typed.
///
/// ```rust
/// use loja_core::types::non_empty;
///
/// assert_eq!(non_empty(Some("")), None);
/// assert_eq!(non_empty(Some("Lace")), Some("Lace"));
/// assert_eq!(non_empty(None), None);
/// ```
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_active() -> bool {
    true
}

// =============================================================================
// Category
// =============================================================================

/// A product category as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Writable category fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CategoryInput {
    /// Creates an active category input with no description.
    pub fn new(name: impl Into<String>) -> Self {
        CategoryInput {
            name: name.into(),
            description: None,
            active: true,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Description as it should be written (`None` when blank).
    pub fn description_value(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as stored.
///
/// Prices are integer cents. `profit_margin` is whatever the column holds;
/// the repositories never write it, so rows created through this layer read
/// back `None`. Use [`Product::computed_margin`] for the derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub cost_price_cents: i64,
    pub sale_price_cents: i64,
    pub active: bool,
    pub profit_margin: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the cost price as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_price_cents)
    }

    /// Returns the sale price as Money.
    #[inline]
    pub fn sale_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents)
    }

    /// Margin derived from the two prices, independent of the stored column.
    pub fn computed_margin(&self) -> f64 {
        profit_margin(self.cost_price(), self.sale_price())
    }
}

/// Writable product fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub cost_price: Money,
    pub sale_price: Money,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl ProductInput {
    /// Creates an active product input with no brand.
    pub fn new(name: impl Into<String>, cost_price: Money, sale_price: Money) -> Self {
        ProductInput {
            name: name.into(),
            brand: None,
            cost_price,
            sale_price,
            active: true,
        }
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Brand as it should be written (`None` when blank).
    pub fn brand_value(&self) -> Option<&str> {
        non_empty(self.brand.as_deref())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer as stored.
///
/// `cpf` is kept exactly as supplied; it is never re-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Writable customer fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub cpf: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CustomerInput {
    /// Creates an active customer input with no contact details.
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        CustomerInput {
            name: name.into(),
            cpf: cpf.into(),
            email: None,
            phone: None,
            active: true,
        }
    }

    /// Sets the e-mail.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// E-mail as it should be written (`None` when blank).
    pub fn email_value(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    /// Phone as it should be written (`None` when blank).
    pub fn phone_value(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_default_to_active() {
        assert!(CategoryInput::new("Lingerie").active);
        assert!(CustomerInput::new("Ana", "123.456.789-09").active);
        assert!(ProductInput::new("Sutiã", Money::zero(), Money::zero()).active);
    }

    #[test]
    fn test_blank_optionals_collapse_to_none() {
        let input = CustomerInput::new("Ana", "123.456.789-09")
            .email("")
            .phone("(11) 99999-0000");
        assert_eq!(input.email_value(), None);
        assert_eq!(input.phone_value(), Some("(11) 99999-0000"));

        let input = CategoryInput::new("Pijamas").description("");
        assert_eq!(input.description_value(), None);

        let input = ProductInput::new("Camisola", Money::zero(), Money::zero()).brand(" ");
        assert_eq!(input.brand_value(), Some(" "));
    }

    #[test]
    fn test_computed_margin_ignores_stored_column() {
        let product = Product {
            id: 1,
            name: "Body".to_string(),
            brand: None,
            cost_price_cents: 1000,
            sale_price_cents: 1500,
            active: true,
            profit_margin: None,
            created_at: Utc::now(),
        };
        assert_eq!(product.computed_margin(), 50.0);
        assert_eq!(product.sale_price().to_string(), "R$ 15,00");
    }

    #[test]
    fn test_input_deserializes_form_defaults() {
        let input: CategoryInput = serde_json::from_str(r#"{"name":"Meias"}"#).unwrap();
        assert_eq!(input, CategoryInput::new("Meias"));

        let input: ProductInput =
            serde_json::from_str(r#"{"name":"Meia","cost_price":250,"sale_price":500}"#).unwrap();
        assert_eq!(input.cost_price.cents(), 250);
        assert!(input.active);
    }

    #[test]
    fn test_customer_serializes_absent_as_null() {
        let customer = Customer {
            id: 7,
            name: "Ana".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: None,
            phone: None,
            active: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json["email"].is_null());
        assert_eq!(json["cpf"], "123.456.789-09");
    }
}
