//! # Record Types
//!
//! The two input record types read by the calculator.
//!
//! ## Wire Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Input Records                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐             │
//! │  │   CatalogueEntry     │          │     SaleRecord       │             │
//! │  │  ──────────────────  │          │  ──────────────────  │             │
//! │  │  "title": string     │◄─ match ─│  "Product": string   │             │
//! │  │  "price": number     │          │  "Quantity": number  │             │
//! │  └──────────────────────┘          └──────────────────────┘             │
//! │                                                                         │
//! │  Matching is exact and case-sensitive.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types can be built directly with `new`, deserialized with serde, or
//! validated out of an arbitrary [`serde_json::Value`] with `from_json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{require_number, require_str, ValidationResult};
use crate::{FIELD_PRICE, FIELD_PRODUCT, FIELD_QUANTITY, FIELD_TITLE};

// =============================================================================
// Catalogue Entry
// =============================================================================

/// A product and its unit price.
///
/// The price is expected to be non-negative but is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub title: String,
    pub price: f64,
}

impl CatalogueEntry {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        CatalogueEntry {
            title: title.into(),
            price,
        }
    }

    /// Builds an entry from a JSON record, requiring `title` and `price`.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::CatalogueEntry;
    /// use serde_json::json;
    ///
    /// let entry = CatalogueEntry::from_json(&json!({
    ///     "title": "Widget",
    ///     "type": "hardware",
    ///     "price": 2.5
    /// }))
    /// .unwrap();
    /// assert_eq!(entry, CatalogueEntry::new("Widget", 2.5));
    ///
    /// assert!(CatalogueEntry::from_json(&json!({"title": "Widget"})).is_err());
    /// ```
    pub fn from_json(record: &Value) -> ValidationResult<Self> {
        let title = require_str(record, FIELD_TITLE)?;
        let price = require_number(record, FIELD_PRICE)?;
        Ok(CatalogueEntry::new(title, price))
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One line of the sales record.
///
/// Quantity is a plain number: negative values (returns) and fractional
/// values are multiplied as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
}

impl SaleRecord {
    pub fn new(product: impl Into<String>, quantity: f64) -> Self {
        SaleRecord {
            product: product.into(),
            quantity,
        }
    }

    /// Builds a sale from a JSON record, requiring `Product` and `Quantity`.
    pub fn from_json(record: &Value) -> ValidationResult<Self> {
        let product = require_str(record, FIELD_PRODUCT)?;
        let quantity = require_number(record, FIELD_QUANTITY)?;
        Ok(SaleRecord::new(product, quantity))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
