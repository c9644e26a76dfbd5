use aisle_core::types::EngineConfig;
use aisle_core::types::config::DEFAULT_RECENCY_CAPACITY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub recent_searches_capacity: usize,
    pub recently_viewed_capacity: usize,
    /// Suffixes appended to the query to build related suggestions, in order.
    pub related_terms: Vec<String>,
    pub max_related: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for SearchConfig {
    fn from(config: &EngineConfig) -> Self {
        let case_matching = if config.matching.case_sensitive {
            CaseMatching::Sensitive
        } else {
            CaseMatching::Insensitive
        };

        Self {
            case_matching,
            recent_searches_capacity: nonzero_or_default(config.recency.recent_searches_capacity),
            recently_viewed_capacity: nonzero_or_default(config.recency.recently_viewed_capacity),
            related_terms: config.suggestions.related_terms.clone(),
            max_related: config.suggestions.effective_max_related(),
        }
    }
}

fn nonzero_or_default(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_RECENCY_CAPACITY
    } else {
        capacity
    }
}
