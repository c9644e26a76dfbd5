//! Substring query matching over name and category.

use crate::config::CaseMatching;
use crate::results::SearchResults;
use aisle_core::Catalog;
use aisle_core::types::CatalogItem;

/// Returns every item whose name or category contains `query`, in catalog
/// order. An empty query matches nothing.
pub fn match_items<'a>(
    catalog: &'a Catalog,
    query: &str,
    case_matching: CaseMatching,
) -> SearchResults<'a> {
    if query.is_empty() {
        return SearchResults::default();
    }

    let matches = match case_matching {
        CaseMatching::Sensitive => catalog
            .iter()
            .filter(|item| matches_fields(item, |field| field.contains(query)))
            .collect(),
        CaseMatching::Insensitive => {
            let needle = query.to_lowercase();
            catalog
                .iter()
                .filter(|item| matches_fields(item, |field| field.to_lowercase().contains(&needle)))
                .collect()
        }
    };

    SearchResults { matches }
}

fn matches_fields(item: &CatalogItem, contains: impl Fn(&str) -> bool) -> bool {
    contains(item.name.as_str()) || contains(item.category.as_str())
}
