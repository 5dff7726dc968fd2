//! # sales-core: Pure Sales Computation
//!
//! This crate is the **heart** of compute-sales. It turns a price catalogue
//! and a sales record into a revenue total plus a list of warnings, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      compute-sales Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/compute-sales (CLI)                        │   │
//! │  │    args ──► config ──► JSON loader ──► report sink              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Vec<serde_json::Value>                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sales-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │price_index│  │calculator │  │  report   │  │   │
//! │  │   │ Catalogue │  │  title ─► │  │  total +  │  │   text    │  │   │
//! │  │   │   Sale    │  │   price   │  │ warnings  │  │ rendering │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO PROCESS EXIT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (CatalogueEntry, SaleRecord)
//! - [`price_index`] - Title to price lookup
//! - [`calculator`] - The revenue computation
//! - [`money`] - Revenue amount and its `$0.00` display
//! - [`report`] - Report text rendering
//! - [`validation`] - Field checks over loosely-typed JSON records
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{compute_total, CatalogueEntry, SaleRecord};
//!
//! let catalogue = vec![CatalogueEntry::new("Widget", 2.5)];
//! let sales = vec![
//!     SaleRecord::new("Widget", 4.0),
//!     SaleRecord::new("Gadget", 1.0),
//! ];
//!
//! let summary = compute_total(&catalogue, &sales);
//! assert_eq!(summary.total().value(), 10.0);
//! assert_eq!(
//!     summary.warnings(),
//!     vec!["Warning: Product 'Gadget' not found in price catalogue.".to_string()]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod price_index;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{compute_total, compute_total_from_json, SalesSummary, UnmatchedProduct};
pub use error::{CoreError, CoreResult, RecordKind, ValidationError};
pub use money::Revenue;
pub use price_index::PriceIndex;
pub use report::SalesReport;
pub use types::{CatalogueEntry, SaleRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// JSON key holding a catalogue entry's product name.
pub const FIELD_TITLE: &str = "title";

/// JSON key holding a catalogue entry's unit price.
pub const FIELD_PRICE: &str = "price";

/// JSON key holding a sale record's product name.
pub const FIELD_PRODUCT: &str = "Product";

/// JSON key holding a sale record's quantity.
pub const FIELD_QUANTITY: &str = "Quantity";
