//! Position cache for the lookahead strategy
//!
//! Memoises evaluator scores by [`PositionKey`]. The key holds occupancy
//! only, so two states that differ in phase or placement counters share an
//! entry: this is a heuristic cache, not a correct transposition table.
//!
//! # Example
//!
//! ```
//! use morris::board::GameState;
//! use morris::search::PositionCache;
//!
//! let mut cache = PositionCache::new();
//! let state = GameState::new();
//!
//! let score = cache.get_or_insert_with(state.position_key(), || 42);
//! assert_eq!(score, 42);
//! assert_eq!(cache.stats().hits, 0);
//!
//! // Second lookup is served from the cache
//! let again = cache.get_or_insert_with(state.position_key(), || unreachable!());
//! assert_eq!(again, 42);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::collections::HashMap;

use crate::board::PositionKey;

/// Score cache keyed by board occupancy
#[derive(Debug, Default)]
pub struct PositionCache {
    entries: HashMap<PositionKey, i32>,
    hits: u64,
    misses: u64,
}

impl PositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached score
    #[must_use]
    pub fn probe(&self, key: &PositionKey) -> Option<i32> {
        self.entries.get(key).copied()
    }

    /// Store a score, replacing any previous entry
    pub fn store(&mut self, key: PositionKey, score: i32) {
        self.entries.insert(key, score);
    }

    /// Return the cached score for `key`, computing and storing it on a miss
    pub fn get_or_insert_with(&mut self, key: PositionKey, compute: impl FnOnce() -> i32) -> i32 {
        if let Some(score) = self.probe(&key) {
            self.hits += 1;
            return score;
        }
        self.misses += 1;
        let score = compute();
        self.store(key, score);
        score
    }

    /// Drop all entries and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Distinct positions stored
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to evaluate
    pub misses: u64,
}

impl CacheStats {
    /// Share of lookups answered from the cache, 0-100
    #[must_use]
    pub fn hit_rate(&self) -> u8 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0;
        }
        (self.hits * 100 / total) as u8
    }
}
