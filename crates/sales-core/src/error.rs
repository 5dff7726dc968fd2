//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sales-core errors (this file)                                         │
//! │  ├── ValidationError  - One record failed a field check                │
//! │  └── CoreError        - Which record failed, and why (fatal)           │
//! │                                                                         │
//! │  compute-sales errors (app crate)                                      │
//! │  └── AppError         - Loader, config, write failures + exit codes    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unmatched products are NOT errors. They are collected as
//! [`UnmatchedProduct`](crate::calculator::UnmatchedProduct) warnings and the
//! computation carries on.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Record Kind
// =============================================================================

/// Which input collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// An entry of the price catalogue.
    CatalogueEntry,
    /// A line of the sales record.
    SaleRecord,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::CatalogueEntry => write!(f, "catalogue entry"),
            RecordKind::SaleRecord => write!(f, "sale record"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Fatal computation errors.
///
/// Any of these aborts the whole computation. No partial total is returned.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record could not be read as a typed record.
    ///
    /// ## When This Occurs
    /// - A catalogue entry lacks `title` or `price`
    /// - A sale record lacks `Product` or `Quantity`
    /// - A field holds the wrong JSON type, or the record is not an object
    #[error("Invalid {kind} at index {index}: {source}")]
    InvalidRecord {
        kind: RecordKind,
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl CoreError {
    /// Wraps a validation failure with the position of the offending record.
    pub fn invalid_record(kind: RecordKind, index: usize, source: ValidationError) -> Self {
        CoreError::InvalidRecord {
            kind,
            index,
            source,
        }
    }

    /// Returns true when the failure is a missing required field.
    pub fn is_missing_field(&self) -> bool {
        match self {
            CoreError::InvalidRecord { source, .. } => {
                matches!(source, ValidationError::Required { .. })
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Record validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Field (or the record itself) has the wrong shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("Product");
        assert_eq!(err.to_string(), "Product is required");

        let err = ValidationError::invalid_format("price", "expected a number");
        assert_eq!(err.to_string(), "price has invalid format: expected a number");
    }

    #[test]
    fn test_invalid_record_message() {
        let err = CoreError::invalid_record(
            RecordKind::SaleRecord,
            3,
            ValidationError::required("Quantity"),
        );
        assert_eq!(
            err.to_string(),
            "Invalid sale record at index 3: Quantity is required"
        );
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_invalid_format_is_not_missing_field() {
        let err = CoreError::invalid_record(
            RecordKind::CatalogueEntry,
            0,
            ValidationError::invalid_format("title", "expected a string"),
        );
        assert!(!err.is_missing_field());
        assert!(err.to_string().starts_with("Invalid catalogue entry at index 0"));
    }
}
