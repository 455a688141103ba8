//! Code Store Module
//!
//! Main store engine: a HashMap from code to entry with lazy and swept
//! expiry, plus bounded collision-avoiding code generation.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, ShareError};
use crate::store::{
    current_timestamp_ms, fallback_code, random_code, Entry, StoreStats, CODE_ALPHABET,
    CODE_LENGTH, DEFAULT_TTL_SECS, MAX_GENERATION_ATTEMPTS, MAX_TEXT_LENGTH,
};

// == Store Options ==
/// Tunables for a [`CodeStore`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Lifetime of every stored entry
    pub ttl: Duration,
    /// Characters per generated code
    pub code_length: usize,
    /// Symbols codes are drawn from
    pub alphabet: &'static str,
    /// Random draws before the timestamp fallback kicks in
    pub max_attempts: usize,
    /// Maximum accepted text length in characters
    pub max_text_length: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            code_length: CODE_LENGTH,
            alphabet: CODE_ALPHABET,
            max_attempts: MAX_GENERATION_ATTEMPTS,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }
}

// == Code Store ==
/// In-memory store mapping short codes to expiring text entries.
///
/// All methods take `&mut self`; concurrent callers share the store through
/// [`SharedStore`](crate::store::SharedStore) so every operation runs under
/// one write lock.
#[derive(Debug)]
pub struct CodeStore {
    /// Code to entry storage
    entries: HashMap<String, Entry>,
    /// Usage statistics
    stats: StoreStats,
    options: StoreOptions,
}

impl Default for CodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeStore {
    // == Constructors ==
    /// Creates a store with the default 30 minute TTL and 4 character codes.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Creates a store with custom options.
    ///
    /// An empty alphabet is replaced by [`CODE_ALPHABET`], a zero code
    /// length is raised to one and a zero TTL is raised to one millisecond.
    pub fn with_options(mut options: StoreOptions) -> Self {
        if options.alphabet.is_empty() {
            warn!("Empty code alphabet configured, using default");
            options.alphabet = CODE_ALPHABET;
        }
        options.code_length = options.code_length.max(1);
        if options.ttl.as_millis() == 0 {
            warn!(ttl = ?options.ttl, "TTL below one millisecond configured, using 1 ms");
            options.ttl = Duration::from_millis(1);
        }

        Self {
            entries: HashMap::new(),
            stats: StoreStats::new(),
            options,
        }
    }

    // == Put ==
    /// Stores `text` and returns the code it can be retrieved with.
    ///
    /// The text is trimmed before storing. Fails with [`ShareError::EmptyInput`]
    /// when nothing is left after trimming and [`ShareError::TextTooLong`] when
    /// it exceeds the configured length cap.
    pub fn put(&mut self, text: &str) -> Result<String> {
        self.put_at(text, current_timestamp_ms())
    }

    /// Same as [`put`](Self::put) with an explicit clock reading.
    pub fn put_at(&mut self, text: &str, now_ms: u64) -> Result<String> {
        self.put_entry_at(text, now_ms).map(|(code, _)| code)
    }

    /// Stores `text` and returns both the code and a copy of the new entry.
    pub fn put_entry(&mut self, text: &str) -> Result<(String, Entry)> {
        self.put_entry_at(text, current_timestamp_ms())
    }

    /// Same as [`put_entry`](Self::put_entry) with an explicit clock reading.
    pub fn put_entry_at(&mut self, text: &str, now_ms: u64) -> Result<(String, Entry)> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ShareError::EmptyInput);
        }

        let length = text.chars().count();
        if length > self.options.max_text_length {
            return Err(ShareError::TextTooLong {
                length,
                max: self.options.max_text_length,
            });
        }

        self.sweep_expired_at(now_ms);

        let code = self.generate_code(now_ms);
        let entry = Entry::new(text.to_string(), now_ms, self.ttl_ms());
        self.entries.insert(code.clone(), entry.clone());

        self.stats.record_put();
        self.stats.set_total_entries(self.entries.len());
        debug!(code = %code, expires_at = entry.expires_at, "Stored text");

        Ok((code, entry))
    }

    // == Get ==
    /// Returns the text stored under `code` if it is still live.
    ///
    /// The lookup is exact; callers normalize user input beforehand. Reading
    /// does not consume the entry.
    pub fn get(&mut self, code: &str) -> Option<String> {
        self.get_at(code, current_timestamp_ms())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading.
    pub fn get_at(&mut self, code: &str, now_ms: u64) -> Option<String> {
        self.lookup_at(code, now_ms).map(|entry| entry.text)
    }

    /// Returns a copy of the live entry stored under `code`.
    pub fn lookup(&mut self, code: &str) -> Option<Entry> {
        self.lookup_at(code, current_timestamp_ms())
    }

    /// Same as [`lookup`](Self::lookup) with an explicit clock reading.
    ///
    /// An entry found expired is removed before reporting a miss.
    pub fn lookup_at(&mut self, code: &str, now_ms: u64) -> Option<Entry> {
        let entry = match self.entries.get(code) {
            Some(entry) => entry,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if entry.is_live_at(now_ms) {
            let entry = entry.clone();
            self.stats.record_hit();
            return Some(entry);
        }

        self.entries.remove(code);
        self.stats.record_evictions(1);
        self.stats.record_miss();
        self.stats.set_total_entries(self.entries.len());
        debug!(code = %code, "Evicted expired entry on read");
        None
    }

    // == Take ==
    /// Removes and returns the live entry under `code` (single-use read).
    pub fn take(&mut self, code: &str) -> Option<Entry> {
        self.take_at(code, current_timestamp_ms())
    }

    /// Same as [`take`](Self::take) with an explicit clock reading.
    pub fn take_at(&mut self, code: &str, now_ms: u64) -> Option<Entry> {
        let taken = match self.entries.remove(code) {
            Some(entry) if entry.is_expired_at(now_ms) => {
                self.stats.record_evictions(1);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry)
            }
            None => {
                self.stats.record_miss();
                None
            }
        };

        self.stats.set_total_entries(self.entries.len());
        taken
    }

    // == Sweep Expired ==
    /// Removes every expired entry. Returns the number removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(current_timestamp_ms())
    }

    /// Same as [`sweep_expired`](Self::sweep_expired) with an explicit clock reading.
    pub fn sweep_expired_at(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live_at(now_ms));
        let removed = before - self.entries.len();

        self.stats.record_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Live Codes ==
    /// Returns the sorted codes of all live entries.
    pub fn live_codes(&self) -> Vec<String> {
        self.live_codes_at(current_timestamp_ms())
    }

    /// Same as [`live_codes`](Self::live_codes) with an explicit clock reading.
    pub fn live_codes_at(&self, now_ms: u64) -> Vec<String> {
        let mut codes: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_live_at(now_ms))
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// Number of live entries, without collecting their codes.
    pub fn live_count(&self) -> usize {
        self.live_count_at(current_timestamp_ms())
    }

    /// Same as [`live_count`](Self::live_count) with an explicit clock reading.
    pub fn live_count_at(&self, now_ms: u64) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.is_live_at(now_ms))
            .count()
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Number of entries held, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Code Generation ==
    /// Draws random codes until one is free, falling back to the clock.
    fn generate_code(&mut self, now_ms: u64) -> String {
        let alphabet = self.options.alphabet.as_bytes();
        let mut rng = rand::rng();

        for _ in 0..self.options.max_attempts {
            let code = random_code(&mut rng, alphabet, self.options.code_length);
            if !self.is_live_at(&code, now_ms) {
                return code;
            }
        }

        let code = fallback_code(now_ms, self.options.code_length);
        self.stats.record_fallback();
        warn!(
            code = %code,
            attempts = self.options.max_attempts,
            live_entries = self.entries.len(),
            "Code space saturated, using timestamp-derived code"
        );
        code
    }

    fn is_live_at(&self, code: &str, now_ms: u64) -> bool {
        self.entries
            .get(code)
            .is_some_and(|entry| entry.is_live_at(now_ms))
    }

    /// TTL in milliseconds, saturating at `u64::MAX`.
    fn ttl_ms(&self) -> u64 {
        u64::try_from(self.options.ttl.as_millis()).unwrap_or(u64::MAX)
    }
}
