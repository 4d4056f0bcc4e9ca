//! # Validation Module
//!
//! Field checks the back office applies before handing input to a
//! repository.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web form                                                     │
//! │  └── HTML maxlength / required attributes                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: BackOffice (loja-db::service)                                │
//! │  ├── THIS MODULE: lengths, required fields, prices, CPF                │
//! │  └── CPF uniqueness lookup                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repositories                                                 │
//! │  └── No checks at all: they write whatever they are given              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters, so accented names ("Sutiã") are not
//! penalized for their UTF-8 width.

use crate::cpf::validate_cpf;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CategoryInput, CustomerInput, ProductInput};
use crate::{
    MAX_BRAND_LEN, MAX_CATEGORY_NAME_LEN, MAX_CPF_LEN, MAX_CUSTOMER_NAME_LEN, MAX_EMAIL_LEN,
    MAX_PHONE_LEN, MAX_PRODUCT_NAME_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `max` characters
///
/// ## Example
/// ```rust
/// use loja_core::validation::validate_required_text;
///
/// assert!(validate_required_text("name", "Lingerie", 50).is_ok());
/// assert!(validate_required_text("name", "  ", 50).is_err());
/// ```
pub fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    validate_max_len(field, value, max)
}

/// Validates an optional text field; `None` always passes.
pub fn validate_optional_text(field: &str, value: Option<&str>, max: usize) -> ValidationResult<()> {
    match value {
        Some(v) => validate_max_len(field, v, max),
        None => Ok(()),
    }
}

fn validate_max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (giveaways)
///
/// ## Example
/// ```rust
/// use loja_core::money::Money;
/// use loja_core::validation::validate_price;
///
/// assert!(validate_price("sale_price", Money::from_cents(1099)).is_ok());
/// assert!(validate_price("sale_price", Money::zero()).is_ok());
/// assert!(validate_price("sale_price", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a category before create/update.
pub fn validate_category(input: &CategoryInput) -> ValidationResult<()> {
    validate_required_text("name", &input.name, MAX_CATEGORY_NAME_LEN)
}

/// Validates a product before create/update.
pub fn validate_product(input: &ProductInput) -> ValidationResult<()> {
    validate_required_text("name", &input.name, MAX_PRODUCT_NAME_LEN)?;
    validate_optional_text("brand", input.brand_value(), MAX_BRAND_LEN)?;
    validate_price("cost_price", input.cost_price)?;
    validate_price("sale_price", input.sale_price)?;
    Ok(())
}

/// Validates a customer before create/update.
///
/// Covers field shape only. CPF uniqueness needs the database and is checked
/// by the caller afterwards.
pub fn validate_customer(input: &CustomerInput) -> ValidationResult<()> {
    validate_required_text("name", &input.name, MAX_CUSTOMER_NAME_LEN)?;
    validate_cpf(&input.cpf)?;
    validate_max_len("cpf", &input.cpf, MAX_CPF_LEN)?;
    validate_optional_text("email", input.email_value(), MAX_EMAIL_LEN)?;
    validate_optional_text("phone", input.phone_value(), MAX_PHONE_LEN)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("name", "Pijamas", 50).is_ok());
        assert!(validate_required_text("name", "", 50).is_err());
        assert!(validate_required_text("name", "   ", 50).is_err());
        assert!(validate_required_text("name", &"A".repeat(51), 50).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        // 50 two-byte characters still fit a 50 character column
        assert!(validate_required_text("name", &"ã".repeat(50), 50).is_ok());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category(&CategoryInput::new("Lingerie")).is_ok());
        assert_eq!(
            validate_category(&CategoryInput::new("")),
            Err(ValidationError::required("name"))
        );
    }

    #[test]
    fn test_validate_product() {
        let ok = ProductInput::new("Sutiã", Money::from_cents(1000), Money::from_cents(1500))
            .brand("Marca");
        assert!(validate_product(&ok).is_ok());

        let negative = ProductInput::new("Sutiã", Money::from_cents(-1), Money::zero());
        assert!(matches!(
            validate_product(&negative),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "cost_price"
        ));

        let long_brand = ok.clone().brand("B".repeat(51));
        assert!(matches!(
            validate_product(&long_brand),
            Err(ValidationError::TooLong { ref field, .. }) if field == "brand"
        ));

        // Blank brand is treated as absent
        assert!(validate_product(&ok.brand("")).is_ok());
    }

    #[test]
    fn test_validate_customer() {
        let ok = CustomerInput::new("Ana Souza", "123.456.789-09").email("ana@example.com");
        assert!(validate_customer(&ok).is_ok());

        let bad_cpf = CustomerInput::new("Ana Souza", "111.111.111-11");
        assert!(matches!(
            validate_customer(&bad_cpf),
            Err(ValidationError::InvalidFormat { ref field, .. }) if field == "cpf"
        ));

        // Eleven digits buried in a too-long string
        let padded = CustomerInput::new("Ana Souza", "CPF: 123.456.789-09");
        assert!(matches!(
            validate_customer(&padded),
            Err(ValidationError::TooLong { ref field, .. }) if field == "cpf"
        ));

        let long_phone = CustomerInput::new("Ana Souza", "12345678909").phone("9".repeat(21));
        assert!(validate_customer(&long_phone).is_err());
    }
}
