//! Response DTOs for the code share API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::DateTime;
use serde::Serialize;

use crate::store::{Entry, StoreStats};

/// Formats a Unix millisecond timestamp as RFC 3339.
fn rfc3339_from_ms(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Response body for storing a text (POST /drops)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// The code the text can be retrieved with
    pub code: String,
    /// Expiry time in RFC 3339 format
    pub expires_at: String,
    /// Seconds until expiry
    pub expires_in: u64,
}

impl PutResponse {
    pub fn new(code: impl Into<String>, entry: &Entry) -> Self {
        Self {
            code: code.into(),
            expires_at: rfc3339_from_ms(entry.expires_at),
            expires_in: entry.ttl_remaining_ms(entry.created_at) / 1000,
        }
    }
}

/// Response body for reading a text (GET /drops/:code, DELETE /drops/:code)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The normalized code that was looked up
    pub code: String,
    /// The stored text
    pub text: String,
    /// Expiry time in RFC 3339 format
    pub expires_at: String,
}

impl GetResponse {
    pub fn new(code: impl Into<String>, entry: Entry) -> Self {
        Self {
            code: code.into(),
            expires_at: rfc3339_from_ms(entry.expires_at),
            text: entry.text,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub puts: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub fallbacks: u64,
    /// Entries currently held in memory
    pub total_entries: usize,
    /// Entries currently readable
    pub live_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from store statistics
    pub fn new(stats: &StoreStats, live_entries: usize) -> Self {
        Self {
            puts: stats.puts,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            fallbacks: stats.fallbacks,
            total_entries: stats.total_entries,
            live_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
