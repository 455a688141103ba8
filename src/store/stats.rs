//! Store Statistics Module
//!
//! Tracks how the code store is being used: stores, lookups, evictions and
//! fallback code generations.

use serde::Serialize;

// == Store Stats ==
/// Counters describing store activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Number of texts stored
    pub puts: u64,
    /// Number of lookups that returned a live entry
    pub hits: u64,
    /// Number of lookups for absent or expired codes
    pub misses: u64,
    /// Number of expired entries removed, lazily or by sweep
    pub evictions: u64,
    /// Number of codes produced by the timestamp fallback
    pub fallbacks: u64,
    /// Entries currently held, expired-but-unswept ones included
    pub total_entries: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates hits / (hits + misses), or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_put(&mut self) {
        self.puts += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds `count` evicted entries.
    pub fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }

    pub fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
