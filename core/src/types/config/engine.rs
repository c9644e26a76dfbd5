use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Capacity used by both recency lists unless configured otherwise.
pub const DEFAULT_RECENCY_CAPACITY: usize = 10;

/// Upper bound on related-term suggestions after the exact-query row.
pub const MAX_RELATED_SUGGESTIONS: usize = 5;

/// Engine configuration, persisted as aisle.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(default)]
    pub recency: RecencyConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl EngineConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("aisle.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, EngineConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), EngineConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.recency.recent_searches_capacity == 0 {
            errors.push("recent_searches_capacity must be at least 1".to_string());
        }

        if self.recency.recently_viewed_capacity == 0 {
            errors.push("recently_viewed_capacity must be at least 1".to_string());
        }

        if self
            .suggestions
            .related_terms
            .iter()
            .any(|term| term.trim().is_empty())
        {
            errors.push("related_terms must not contain blank entries".to_string());
        }

        if self.suggestions.max_related == 0 {
            errors.push("max_related must be at least 1".to_string());
        }

        if self.suggestions.max_related > MAX_RELATED_SUGGESTIONS {
            errors.push(format!("max_related must be at most {MAX_RELATED_SUGGESTIONS}"));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let errors = self.validate();
        if errors.is_empty() {
            return self.clone();
        }
        tracing::warn!(?errors, "invalid engine config values replaced with defaults");

        let defaults = Self::default();
        Self {
            recency: RecencyConfig {
                recent_searches_capacity: if self.recency.recent_searches_capacity == 0 {
                    defaults.recency.recent_searches_capacity
                } else {
                    self.recency.recent_searches_capacity
                },
                recently_viewed_capacity: if self.recency.recently_viewed_capacity == 0 {
                    defaults.recency.recently_viewed_capacity
                } else {
                    self.recency.recently_viewed_capacity
                },
            },
            suggestions: SuggestionsConfig {
                related_terms: self
                    .suggestions
                    .related_terms
                    .iter()
                    .filter(|term| !term.trim().is_empty())
                    .cloned()
                    .collect(),
                max_related: self.suggestions.effective_max_related(),
            },
            matching: self.matching.clone(),
        }
    }
}

/// Capacities of the recent-searches and recently-viewed lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecencyConfig {
    #[serde(default = "default_capacity")]
    pub recent_searches_capacity: usize,
    #[serde(default = "default_capacity")]
    pub recently_viewed_capacity: usize,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            recent_searches_capacity: default_capacity(),
            recently_viewed_capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_RECENCY_CAPACITY
}

/// Related-term vocabulary appended after the exact-query suggestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_related_terms")]
    pub related_terms: Vec<String>,
    #[serde(default = "default_max_related")]
    pub max_related: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            related_terms: default_related_terms(),
            max_related: default_max_related(),
        }
    }
}

impl SuggestionsConfig {
    /// `max_related` bounded to `1..=MAX_RELATED_SUGGESTIONS`; zero falls back
    /// to the default.
    pub fn effective_max_related(&self) -> usize {
        if self.max_related == 0 {
            default_max_related()
        } else {
            self.max_related.min(MAX_RELATED_SUGGESTIONS)
        }
    }
}

fn default_related_terms() -> Vec<String> {
    ["drill", "drill rental", "drill bit", "stapler", "handle"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_max_related() -> usize {
    MAX_RELATED_SUGGESTIONS
}

/// Matching settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum EngineConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
