//! Search results types.

use aisle_core::types::CatalogItem;

/// Matched items in catalog order, borrowed from the catalog.
///
/// Read-only: presenters iterate it or take an owned snapshot with `to_vec()`.
#[derive(Debug, Clone, Default)]
pub struct SearchResults<'a> {
    pub(crate) matches: Vec<&'a CatalogItem>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogItem> + '_ {
        self.matches.iter().copied()
    }

    /// First match in catalog order. No relevance ranking is applied.
    pub fn best_match(&self) -> Option<&'a CatalogItem> {
        self.matches.first().copied()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn to_vec(&self) -> Vec<CatalogItem> {
        self.matches.iter().map(|item| (*item).clone()).collect()
    }
}
