//! Search session: current query plus the two recency lists.

use crate::config::SearchConfig;
use crate::matcher::match_items;
use crate::results::SearchResults;
use crate::suggest::{RelatedTerms, SuffixTerms, Suggestion, SuggestionGenerator};
use aisle_core::types::CatalogItem;
use aisle_core::{Catalog, RecencyStore};
use std::sync::Arc;

/// Observable mode of a session, driven only by the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Query is empty; presenters show recent searches and recently viewed.
    EmptyQuery,
    /// Query is non-empty; matches and suggestions are live.
    ActiveQuery,
}

/// Search session over a shared catalog.
///
/// Matches and suggestions are derived from the query on every read and never
/// stored. All operations are synchronous.
#[derive(Debug)]
pub struct SearchSession {
    catalog: Arc<Catalog>,
    config: SearchConfig,
    generator: SuggestionGenerator,
    query: String,
    recent_searches: RecencyStore<String>,
    recently_viewed: RecencyStore<CatalogItem>,
}

/// Create operations.
impl SearchSession {
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Self {
        let generator = SuggestionGenerator::new(
            Box::new(SuffixTerms::new(config.related_terms.clone())),
            config.max_related,
        );

        Self {
            catalog,
            generator,
            query: String::new(),
            recent_searches: RecencyStore::for_queries(config.recent_searches_capacity),
            recently_viewed: RecencyStore::for_items(config.recently_viewed_capacity),
            config,
        }
    }

    /// Replaces the related-term source used after the exact-query row.
    pub fn with_related_terms(mut self, related: Box<dyn RelatedTerms>) -> Self {
        self.generator = SuggestionGenerator::new(related, self.config.max_related);
        self
    }
}

/// Query operations.
impl SearchSession {
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SessionMode {
        if self.query.is_empty() {
            SessionMode::EmptyQuery
        } else {
            SessionMode::ActiveQuery
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matched_items(&self) -> SearchResults<'_> {
        match_items(&self.catalog, &self.query, self.config.case_matching)
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        if self.query.is_empty() {
            return Vec::new();
        }

        let matches = self.matched_items();
        let best_category = matches.best_match().map(|item| &item.category);
        self.generator.suggest(&self.query, best_category)
    }
}

/// Selection operations.
impl SearchSession {
    /// Records the suggestion's text as a recent search and the selected (or
    /// implicitly best-matching) item as recently viewed.
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) {
        let text = suggestion.text.trim();
        if !text.is_empty() {
            self.recent_searches.record(text.to_string());
        }

        let viewed = match &suggestion.item {
            Some(item) => Some(item.clone()),
            None => self.matched_items().best_match().cloned(),
        };

        tracing::debug!(
            text,
            viewed = viewed.as_ref().map(|item| item.id.into_inner()),
            "suggestion selected"
        );

        if let Some(item) = viewed {
            self.recently_viewed.record(item);
        }
    }

    pub fn record_viewed(&mut self, item: CatalogItem) {
        self.recently_viewed.record(item);
    }

    pub fn recently_viewed(&self) -> Vec<CatalogItem> {
        self.recently_viewed.all()
    }
}

/// Recent search operations.
impl SearchSession {
    /// Trims `text` the same way `select_suggestion` does before recording.
    pub fn remove_recent_search(&mut self, text: &str) {
        self.recent_searches.remove(&text.trim().to_string());
    }

    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.recent_searches.all()
    }
}
