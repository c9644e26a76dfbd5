//! Aisle search suggestion and recency-tracking engine.
//!
//! Answers, as the user types into a search field:
//! which catalog items match, which query suggestions to show, and how the
//! recent-searches and recently-viewed lists evolve.
//!
//! # Design
//!
//! - Matching is case-insensitive substring containment over item name and
//!   category. Results keep catalog order; the first match is the best match.
//! - Suggestions are the typed query (linked to the best match's category)
//!   followed by related terms from a pluggable `RelatedTerms` source.
//! - The catalog is immutable and shared via `Arc`; each `SearchSession` owns
//!   its query and both recency lists.
//!
//! # API
//!
//! - `set_query()`, `clear_query()`: Drive the session mode
//! - `matched_items()`, `suggestions()`: Derived on every call
//! - `select_suggestion()`, `record_viewed()`: Feed the recency lists

mod config;
pub mod matcher;
mod results;
mod session;
pub mod suggest;

pub use config::{CaseMatching, SearchConfig};
pub use results::SearchResults;
pub use session::{SearchSession, SessionMode};
pub use suggest::{RelatedTerms, SuffixTerms, Suggestion, SuggestionGenerator};
