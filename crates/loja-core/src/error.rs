//! # Error Types
//!
//! Domain error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loja-core errors (this file)                                          │
//! │  └── ValidationError  - Input rejected before any write                │
//! │                                                                         │
//! │  loja-db errors (separate crate)                                       │
//! │  ├── DbError          - Statement execution failures                   │
//! │  └── ServiceError     - ValidationError | DbError from BackOffice      │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├─► ServiceError ─► web layer flash message    │
//! │  DbError ───────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the caller-side workflow before a repository write. The
/// repositories themselves never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (malformed CPF, unparsable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., a CPF already registered to another customer).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates a Required error for `field`.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "brand".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "brand must be at most 50 characters");
    }

    #[test]
    fn test_duplicate_message_names_value() {
        let err = ValidationError::duplicate("cpf", "123.456.789-09");
        assert_eq!(err.to_string(), "cpf '123.456.789-09' already exists");
    }
}
