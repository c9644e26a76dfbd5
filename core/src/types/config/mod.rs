mod engine;

pub use engine::{
    DEFAULT_RECENCY_CAPACITY, EngineConfig, EngineConfigError, MAX_RELATED_SUGGESTIONS,
    MatchingConfig, RecencyConfig, SuggestionsConfig,
};
