//! # Validation Module
//!
//! Field checks for loosely-typed JSON records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Loader (compute-sales)                                       │
//! │  ├── File exists, parses as JSON                                       │
//! │  └── Top level is a non-empty array                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record construction (THIS MODULE)                            │
//! │  ├── Record is an object                                               │
//! │  ├── Required field present                                            │
//! │  └── Field has the expected JSON type                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Only ever sees typed records                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the accessed fields are checked. Extra fields pass through untouched
//! and price/quantity ranges are not validated.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field name reported when the record itself is not a JSON object.
pub const RECORD_FIELD: &str = "record";

/// Views a record as a JSON object.
///
/// ## Example
/// ```rust
/// use sales_core::validation::require_object;
/// use serde_json::json;
///
/// assert!(require_object(&json!({"title": "Widget"})).is_ok());
/// assert!(require_object(&json!(["Widget"])).is_err());
/// ```
pub fn require_object(record: &Value) -> ValidationResult<&Map<String, Value>> {
    record.as_object().ok_or_else(|| {
        ValidationError::invalid_format(
            RECORD_FIELD,
            format!("expected a JSON object, found {}", json_type_name(record)),
        )
    })
}

/// Looks up a required field.
///
/// A field that is present with a `null` value counts as present; the typed
/// accessors below reject it.
pub fn require_field<'a>(record: &'a Value, field: &str) -> ValidationResult<&'a Value> {
    require_object(record)?
        .get(field)
        .ok_or_else(|| ValidationError::required(field))
}

/// Reads a required string field.
///
/// ## Example
/// ```rust
/// use sales_core::validation::require_str;
/// use serde_json::json;
///
/// let sale = json!({"Product": "Widget", "Quantity": 4});
/// assert_eq!(require_str(&sale, "Product").unwrap(), "Widget");
/// assert!(require_str(&sale, "Quantity").is_err());
/// assert!(require_str(&sale, "Missing").is_err());
/// ```
pub fn require_str<'a>(record: &'a Value, field: &str) -> ValidationResult<&'a str> {
    let value = require_field(record, field)?;
    value.as_str().ok_or_else(|| {
        ValidationError::invalid_format(
            field,
            format!("expected a string, found {}", json_type_name(value)),
        )
    })
}

/// Reads a required numeric field as `f64`.
///
/// Integers and floats are both accepted.
pub fn require_number(record: &Value, field: &str) -> ValidationResult<f64> {
    let value = require_field(record, field)?;
    value.as_f64().ok_or_else(|| {
        ValidationError::invalid_format(
            field,
            format!("expected a number, found {}", json_type_name(value)),
        )
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
