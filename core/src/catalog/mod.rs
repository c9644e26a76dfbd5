//! Immutable, already-loaded product catalog.

use crate::error::CatalogError;
use crate::types::{CatalogItem, Category, ItemId, ItemName, Price};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Ordered collection of catalog items with unique ids.
///
/// Read-only after construction, so one instance can back any number of
/// search sessions through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

/// Wire shape of the catalog document.
#[derive(Deserialize)]
struct CatalogDocument {
    products: Vec<ProductRecord>,
}

/// One product as it appears on the wire. `thumbnail` and any other
/// presentation fields are ignored.
#[derive(Deserialize)]
struct ProductRecord {
    id: u64,
    name: String,
    category: String,
    price: f64,
}

impl ProductRecord {
    fn into_item(self, index: usize) -> Result<CatalogItem, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidItem { index, reason };

        let name = ItemName::try_new(self.name).map_err(|e| invalid(format!("name: {e}")))?;
        let category =
            Category::try_new(self.category).map_err(|e| invalid(format!("category: {e}")))?;
        let price = Price::try_new(self.price).map_err(|e| invalid(format!("price: {e}")))?;

        Ok(CatalogItem::new(ItemId::new(self.id), name, category, price))
    }
}

/// Create operations.
impl Catalog {
    /// Builds a catalog from validated items, rejecting duplicate ids.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parses a `{ "products": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let items = document
            .products
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_item(index))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::from_items(items)?;
        tracing::info!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Reads and parses a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Read operations.
impl Catalog {
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests;
