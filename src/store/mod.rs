//! Store Module
//!
//! Ephemeral code-addressed text storage with TTL expiry and collision-free
//! short code generation.

mod code;
mod code_store;
mod entry;
mod stats;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use code::{fallback_code, normalize_code, random_code};
pub use code_store::{CodeStore, StoreOptions};
pub use entry::{current_timestamp_ms, Entry};
pub use stats::StoreStats;

/// Store handle shared between request handlers and the reaper task.
pub type SharedStore = Arc<RwLock<CodeStore>>;

// == Public Constants ==
/// Symbols codes are drawn from
pub const CODE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a generated code
pub const CODE_LENGTH: usize = 4;

/// How long a stored text stays readable, in seconds (30 minutes)
pub const DEFAULT_TTL_SECS: u64 = 30 * 60;

/// Random draws attempted before falling back to a timestamp-derived code
pub const MAX_GENERATION_ATTEMPTS: usize = 100;

/// Maximum accepted text length in characters
pub const MAX_TEXT_LENGTH: usize = 5000;
