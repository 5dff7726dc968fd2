//! # Price Index
//!
//! Title to price lookup built once per computation.
//!
//! Duplicate titles are resolved by plain map insertion: the entry that
//! comes later in the catalogue overwrites the earlier one, and nothing is
//! reported. That is the intended behavior, not a missing check.

use std::collections::HashMap;

use crate::types::CatalogueEntry;

/// Mapping from product title to unit price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    /// Builds the index from catalogue entries, last duplicate wins.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::{CatalogueEntry, PriceIndex};
    ///
    /// let index = PriceIndex::build(&[
    ///     CatalogueEntry::new("A", 1.0),
    ///     CatalogueEntry::new("A", 3.0),
    /// ]);
    /// assert_eq!(index.len(), 1);
    /// assert_eq!(index.price_of("A"), Some(3.0));
    /// ```
    pub fn build(catalogue: &[CatalogueEntry]) -> Self {
        let mut prices = HashMap::with_capacity(catalogue.len());
        for entry in catalogue {
            prices.insert(entry.title.clone(), entry.price);
        }
        PriceIndex { prices }
    }

    /// Exact, case-sensitive lookup.
    #[inline]
    pub fn price_of(&self, title: &str) -> Option<f64> {
        self.prices.get(title).copied()
    }

    #[inline]
    pub fn contains(&self, title: &str) -> bool {
        self.prices.contains_key(title)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<'a> FromIterator<&'a CatalogueEntry> for PriceIndex {
    fn from_iter<I: IntoIterator<Item = &'a CatalogueEntry>>(iter: I) -> Self {
        let prices = iter
            .into_iter()
            .map(|entry| (entry.title.clone(), entry.price))
            .collect();
        PriceIndex { prices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalogue() {
        let index = PriceIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.price_of("Widget"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        let index = PriceIndex::build(&[CatalogueEntry::new("Widget", 2.5)]);
        assert!(index.contains("Widget"));
        assert!(!index.contains("widget"));
        assert!(!index.contains("Widget "));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let catalogue = vec![
            CatalogueEntry::new("A", 1.0),
            CatalogueEntry::new("B", 2.0),
            CatalogueEntry::new("A", 3.0),
        ];
        let index = PriceIndex::build(&catalogue);
        assert_eq!(index.len(), 2);
        assert_eq!(index.price_of("A"), Some(3.0));

        let collected: PriceIndex = catalogue.iter().collect();
        assert_eq!(collected, index);
    }
}
