//! Bounded, deduplicating most-recently-used lists.
//!
//! # Design
//!
//! - Entries are kept in a `VecDeque`, index 0 = most recent.
//! - Equality is a plain `fn(&T, &T) -> bool` supplied at construction, so the
//!   same store backs both recent searches (case-insensitive text) and
//!   recently viewed items (same id).
//! - `record()` is dedup, promote and evict in one step. Capacities are small,
//!   so a linear scan is used instead of a keyed LRU.

use crate::types::CatalogItem;
use std::collections::VecDeque;

/// Equality rule deciding whether two values are the same recency entry.
pub type Equivalence<T> = fn(&T, &T) -> bool;

#[derive(Debug, Clone)]
pub struct RecencyStore<T> {
    entries: VecDeque<T>,
    capacity: usize,
    eq: Equivalence<T>,
}

/// Create operations.
impl<T> RecencyStore<T> {
    pub fn new(capacity: usize, eq: Equivalence<T>) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            eq,
        }
    }
}

impl RecencyStore<String> {
    /// Store for free-text queries; entries differing only in case are equal.
    pub fn for_queries(capacity: usize) -> Self {
        Self::new(capacity, same_query)
    }
}

impl RecencyStore<CatalogItem> {
    /// Store for catalog items; entries with the same id are equal.
    pub fn for_items(capacity: usize) -> Self {
        Self::new(capacity, CatalogItem::same_id)
    }
}

#[allow(clippy::ptr_arg)]
fn same_query(a: &String, b: &String) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Mutation operations.
impl<T> RecencyStore<T> {
    /// Moves `value` to the front, replacing any equal entry, then evicts
    /// from the tail beyond capacity.
    pub fn record(&mut self, value: T) {
        self.remove(&value);
        self.entries.push_front(value);

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            tracing::trace!(evicted, capacity = self.capacity, "recency store evicted");
        }
    }

    /// Removes the entry equal to `value`. No-op if absent.
    pub fn remove(&mut self, value: &T) {
        if let Some(pos) = self.position(value) {
            self.entries.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Read operations.
impl<T> RecencyStore<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|entry| (self.eq)(entry, value))
    }
}

impl<T: Clone> RecencyStore<T> {
    /// Snapshot of all entries, most recent first.
    pub fn all(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
