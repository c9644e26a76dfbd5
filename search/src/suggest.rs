//! Suggestion rows shown under the search field.

use aisle_core::types::config::MAX_RELATED_SUGGESTIONS;
use aisle_core::types::{CatalogItem, Category};

/// One suggestion row.
///
/// Only the exact-query row may carry a category, and only an item-match row
/// carries an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub category: Option<Category>,
    pub item: Option<CatalogItem>,
}

impl Suggestion {
    /// Row echoing the query, optionally linked to the best match's category.
    pub fn query(text: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            text: text.into(),
            category,
            item: None,
        }
    }

    /// Synthesized related-term row.
    pub fn related(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            item: None,
        }
    }

    /// Row selecting a concrete catalog item; its text is the item name.
    pub fn for_item(item: CatalogItem) -> Self {
        Self {
            text: item.name.to_string(),
            category: None,
            item: Some(item),
        }
    }

    pub fn is_item_match(&self) -> bool {
        self.item.is_some()
    }
}

/// Source of related queries for a typed query.
pub trait RelatedTerms: Send + Sync {
    /// Related queries in display order. The generator caps the count.
    fn related(&self, query: &str) -> Vec<String>;
}

/// Appends each suffix of a fixed vocabulary to the query.
#[derive(Debug, Clone)]
pub struct SuffixTerms {
    suffixes: Vec<String>,
}

impl SuffixTerms {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl RelatedTerms for SuffixTerms {
    fn related(&self, query: &str) -> Vec<String> {
        self.suffixes
            .iter()
            .map(|suffix| format!("{query} {suffix}"))
            .collect()
    }
}

/// Builds the ordered suggestion list for a non-empty query.
pub struct SuggestionGenerator {
    related: Box<dyn RelatedTerms>,
    max_related: usize,
}

impl SuggestionGenerator {
    /// `max_related` is clamped to `MAX_RELATED_SUGGESTIONS`.
    pub fn new(related: Box<dyn RelatedTerms>, max_related: usize) -> Self {
        Self {
            related,
            max_related: max_related.min(MAX_RELATED_SUGGESTIONS),
        }
    }

    /// Exact-query row first, then related rows in source order.
    pub fn suggest(&self, query: &str, best_match_category: Option<&Category>) -> Vec<Suggestion> {
        let related = self.related.related(query);

        let mut suggestions = Vec::with_capacity(1 + related.len().min(self.max_related));
        suggestions.push(Suggestion::query(query, best_match_category.cloned()));
        suggestions.extend(
            related
                .into_iter()
                .take(self.max_related)
                .map(Suggestion::related),
        );
        suggestions
    }
}

impl std::fmt::Debug for SuggestionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionGenerator")
            .field("max_related", &self.max_related)
            .finish_non_exhaustive()
    }
}
