//! # Sales Calculator
//!
//! Computes total revenue of a sales record against a price catalogue.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  catalogue ──► PriceIndex::build (last duplicate wins)                  │
//! │                        │                                                │
//! │  sales ──► for each sale, in order                                      │
//! │                        │                                                │
//! │            ┌───────────┴────────────┐                                   │
//! │            ▼                        ▼                                   │
//! │     title in index            title missing                             │
//! │  total += price × qty    warnings.push(UnmatchedProduct)                │
//! │                                                                         │
//! │  ──► SalesSummary { total, unmatched }                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure: no I/O, inputs are borrowed immutably, same inputs give the same
//! summary.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult, RecordKind};
use crate::money::Revenue;
use crate::price_index::PriceIndex;
use crate::types::{CatalogueEntry, SaleRecord};
use crate::validation::ValidationResult;

// =============================================================================
// Warnings
// =============================================================================

/// A sale whose product has no catalogue entry.
///
/// Non-fatal: the sale contributes nothing to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedProduct {
    pub product: String,
}

impl fmt::Display for UnmatchedProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: Product '{}' not found in price catalogue.",
            self.product
        )
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Result of one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    total: Revenue,
    matched: usize,
    unmatched: Vec<UnmatchedProduct>,
}

impl SalesSummary {
    /// Sum of price × quantity over matched sales.
    #[inline]
    pub fn total(&self) -> Revenue {
        self.total
    }

    /// Number of sales that found a price.
    #[inline]
    pub fn matched_count(&self) -> usize {
        self.matched
    }

    /// Unmatched sales, in sales order.
    #[inline]
    pub fn unmatched(&self) -> &[UnmatchedProduct] {
        &self.unmatched
    }

    /// Warning lines, one per unmatched sale, in sales order.
    pub fn warnings(&self) -> Vec<String> {
        self.unmatched.iter().map(ToString::to_string).collect()
    }

    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.unmatched.is_empty()
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Computes total revenue and collects a warning for every unmatched sale.
///
/// ## Example
/// ```rust
/// use sales_core::{compute_total, CatalogueEntry, SaleRecord};
///
/// let catalogue = [CatalogueEntry::new("A", 1.0), CatalogueEntry::new("A", 3.0)];
/// let sales = [SaleRecord::new("A", 2.0)];
///
/// // Last catalogue price wins
/// assert_eq!(compute_total(&catalogue, &sales).total().value(), 6.0);
/// ```
pub fn compute_total(catalogue: &[CatalogueEntry], sales: &[SaleRecord]) -> SalesSummary {
    let index = PriceIndex::build(catalogue);

    let mut total = Revenue::zero();
    let mut matched = 0;
    let mut unmatched = Vec::new();

    for sale in sales {
        match index.price_of(&sale.product) {
            Some(price) => {
                total += Revenue::line_total(price, sale.quantity);
                matched += 1;
            }
            None => unmatched.push(UnmatchedProduct {
                product: sale.product.clone(),
            }),
        }
    }

    SalesSummary {
        total,
        matched,
        unmatched,
    }
}

/// Validates raw JSON records, then runs [`compute_total`].
///
/// The catalogue is validated before the sales. The first record that lacks a
/// required field (or has the wrong type) aborts with
/// [`CoreError::InvalidRecord`] and no summary is produced.
pub fn compute_total_from_json(catalogue: &[Value], sales: &[Value]) -> CoreResult<SalesSummary> {
    let catalogue = parse_records(catalogue, RecordKind::CatalogueEntry, CatalogueEntry::from_json)?;
    let sales = parse_records(sales, RecordKind::SaleRecord, SaleRecord::from_json)?;
    Ok(compute_total(&catalogue, &sales))
}

fn parse_records<T, F>(records: &[Value], kind: RecordKind, parse: F) -> CoreResult<Vec<T>>
where
    F: Fn(&Value) -> ValidationResult<T>,
{
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            parse(record).map_err(|source| CoreError::invalid_record(kind, index, source))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    fn widget_catalogue() -> Vec<CatalogueEntry> {
        vec![CatalogueEntry::new("Widget", 2.5)]
    }

    #[test]
    fn test_empty_sales() {
        let summary = compute_total(&widget_catalogue(), &[]);
        assert_eq!(summary.total().value(), 0.0);
        assert!(summary.warnings().is_empty());

        let summary = compute_total(&[], &[]);
        assert_eq!(summary.total().value(), 0.0);
        assert!(!summary.has_warnings());
    }

    #[test]
    fn test_empty_catalogue_warns_for_every_sale() {
        let sales = vec![
            SaleRecord::new("B", 1.0),
            SaleRecord::new("A", 2.0),
            SaleRecord::new("B", 3.0),
        ];
        let summary = compute_total(&[], &sales);

        assert_eq!(summary.total().value(), 0.0);
        assert_eq!(
            summary.warnings(),
            vec![
                "Warning: Product 'B' not found in price catalogue.",
                "Warning: Product 'A' not found in price catalogue.",
                "Warning: Product 'B' not found in price catalogue.",
            ]
        );
        assert_eq!(summary.matched_count(), 0);
    }

    #[test]
    fn test_matched_widget() {
        let summary = compute_total(&widget_catalogue(), &[SaleRecord::new("Widget", 4.0)]);
        assert_eq!(summary.total().value(), 10.0);
        assert!(summary.warnings().is_empty());
        assert_eq!(summary.matched_count(), 1);
    }

    #[test]
    fn test_unmatched_gadget() {
        let summary = compute_total(&widget_catalogue(), &[SaleRecord::new("Gadget", 1.0)]);
        assert_eq!(summary.total().value(), 0.0);
        assert_eq!(
            summary.warnings(),
            vec!["Warning: Product 'Gadget' not found in price catalogue."]
        );
    }

    #[test]
    fn test_last_duplicate_price_wins() {
        let catalogue = vec![CatalogueEntry::new("A", 1.0), CatalogueEntry::new("A", 3.0)];
        let summary = compute_total(&catalogue, &[SaleRecord::new("A", 2.0)]);
        assert_eq!(summary.total().value(), 6.0);
    }

    #[test]
    fn test_all_matched_is_exact_sum() {
        let catalogue = vec![
            CatalogueEntry::new("Apple", 0.5),
            CatalogueEntry::new("Bread", 2.25),
            CatalogueEntry::new("Cheese", 4.0),
        ];
        let sales = vec![
            SaleRecord::new("Bread", 2.0),
            SaleRecord::new("Apple", 6.0),
            SaleRecord::new("Cheese", 1.0),
            SaleRecord::new("Apple", -2.0),
        ];
        let summary = compute_total(&catalogue, &sales);

        // 4.5 + 3.0 + 4.0 - 1.0
        assert_eq!(summary.total().value(), 10.5);
        assert!(!summary.has_warnings());
        assert_eq!(summary.matched_count(), 4);
    }

    #[test]
    fn test_mixed_preserves_warning_order() {
        let catalogue = widget_catalogue();
        let sales = vec![
            SaleRecord::new("Zeta", 1.0),
            SaleRecord::new("Widget", 2.0),
            SaleRecord::new("Alpha", 1.0),
            SaleRecord::new("widget", 1.0),
        ];
        let summary = compute_total(&catalogue, &sales);

        assert_eq!(summary.total().value(), 5.0);
        let products: Vec<&str> = summary
            .unmatched()
            .iter()
            .map(|u| u.product.as_str())
            .collect();
        assert_eq!(products, vec!["Zeta", "Alpha", "widget"]);
    }

    #[test]
    fn test_warning_substitutes_product_verbatim() {
        let warning = UnmatchedProduct {
            product: "Tom's \"Best\" Jam ".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Warning: Product 'Tom's \"Best\" Jam ' not found in price catalogue."
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let catalogue = widget_catalogue();
        let sales = vec![SaleRecord::new("Widget", 1.0), SaleRecord::new("Gadget", 1.0)];
        let first = compute_total(&catalogue, &sales);
        let second = compute_total(&catalogue, &sales);

        assert_eq!(first, second);
        assert_eq!(catalogue, widget_catalogue());
        assert_eq!(sales.len(), 2);
    }

    #[test]
    fn test_from_json_happy_path() {
        let catalogue = vec![
            json!({"title": "Widget", "type": "tools", "price": 2.5}),
            json!({"title": "Gizmo", "price": 10}),
        ];
        let sales = vec![
            json!({"SALE_ID": 1, "Product": "Widget", "Quantity": 4}),
            json!({"SALE_ID": 2, "Product": "Gizmo", "Quantity": 1}),
            json!({"SALE_ID": 3, "Product": "Gadget", "Quantity": 1}),
        ];
        let summary = compute_total_from_json(&catalogue, &sales).unwrap();

        assert_eq!(summary.total().value(), 20.0);
        assert_eq!(summary.warnings().len(), 1);
    }

    #[test]
    fn test_from_json_missing_sale_field_aborts() {
        let catalogue = vec![json!({"title": "Widget", "price": 2.5})];
        let sales = vec![
            json!({"Product": "Widget", "Quantity": 1}),
            json!({"Product": "Widget"}),
        ];
        let err = compute_total_from_json(&catalogue, &sales).unwrap_err();

        assert!(err.is_missing_field());
        match err {
            CoreError::InvalidRecord {
                kind,
                index,
                source,
            } => {
                assert_eq!(kind, RecordKind::SaleRecord);
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::required("Quantity"));
            }
        }
    }

    #[test]
    fn test_from_json_catalogue_checked_before_sales() {
        let catalogue = vec![json!({"price": 2.5})];
        let sales = vec![json!({"Quantity": 1})];
        let err = compute_total_from_json(&catalogue, &sales).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidRecord {
                kind: RecordKind::CatalogueEntry,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_from_json_rejects_non_object_record() {
        let err = compute_total_from_json(&[json!("Widget")], &[]).unwrap_err();
        assert!(!err.is_missing_field());
    }
}
