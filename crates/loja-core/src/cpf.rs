//! # CPF Module
//!
//! Structural check for the Brazilian individual taxpayer identifier.
//!
//! ## What Is Checked
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input "123.456.789-09"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Keep digits only ──► "12345678909"                                    │
//! │       │                                                                 │
//! │       ├── not exactly 11 digits?  → invalid                            │
//! │       ├── all 11 digits the same? → invalid ("000.000.000-00")         │
//! │       │                                                                 │
//! │       └── otherwise               → valid                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two official check digits are NOT verified. A number like
//! `123.456.789-00` passes even though its check digits are wrong.

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Returns whether `cpf` is structurally plausible.
///
/// Punctuation is ignored, so both `123.456.789-09` and `12345678909` are
/// accepted.
///
/// ## Example
/// ```rust
/// use loja_core::cpf::is_valid_cpf;
///
/// assert!(is_valid_cpf("123.456.789-09"));
/// assert!(!is_valid_cpf("111.111.111-11"));
/// assert!(!is_valid_cpf("123.45"));
/// assert!(!is_valid_cpf(""));
/// ```
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<char> = cpf.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != CPF_DIGITS {
        return false;
    }

    digits.iter().any(|d| *d != digits[0])
}

/// Same rule as [`is_valid_cpf`], as a `Result` for `?` propagation.
pub fn validate_cpf(cpf: &str) -> ValidationResult<()> {
    if cpf.trim().is_empty() {
        return Err(ValidationError::required("cpf"));
    }

    if !is_valid_cpf(cpf) {
        return Err(ValidationError::invalid_format(
            "cpf",
            "must have 11 digits, not all identical",
        ));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_and_bare_forms() {
        assert!(is_valid_cpf("123.456.789-09"));
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf(" 123 456 789 09 "));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("00000000000"));
        assert!(!is_valid_cpf("999.999.999-99"));
    }

    #[test]
    fn test_wrong_digit_count_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("123.45"));
        assert!(!is_valid_cpf("123.456.789-091"));
        assert!(!is_valid_cpf("abc.def.ghi-jk"));
    }

    #[test]
    fn test_check_digits_not_verified() {
        // Wrong check digits still pass: the rule is structural only
        assert!(is_valid_cpf("123.456.789-00"));
    }

    #[test]
    fn test_validate_cpf_errors() {
        assert!(validate_cpf("123.456.789-09").is_ok());
        assert_eq!(validate_cpf("  "), Err(ValidationError::required("cpf")));
        assert!(matches!(
            validate_cpf("111.111.111-11"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
