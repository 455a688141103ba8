//! Entry Module
//!
//! Defines a single stored text drop and its expiry bookkeeping.

use std::time::{SystemTime, UNIX_EPOCH};

// == Entry ==
/// A stored text payload with its fixed lifetime.
///
/// Entries are immutable once created; `expires_at` is never extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The stored text
    pub text: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl Entry {
    // == Constructor ==
    /// Creates an entry that lives for `ttl_ms` starting at `now_ms`.
    pub fn new(text: String, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            text,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Liveness ==
    /// Checks whether the entry is still readable at `now_ms`.
    ///
    /// Boundary condition: an entry is expired once `now_ms >= expires_at`, so
    /// it is readable for exactly `ttl_ms` milliseconds.
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at
    }

    /// Checks whether the entry has expired at `now_ms`.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        !self.is_live_at(now_ms)
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
