//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::store::{
    StoreOptions, CODE_ALPHABET, CODE_LENGTH, DEFAULT_TTL_SECS, MAX_GENERATION_ATTEMPTS,
    MAX_TEXT_LENGTH,
};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a stored text in seconds
    pub ttl_secs: u64,
    /// Characters per generated code
    pub code_length: usize,
    /// Random draws before falling back to a timestamp-derived code
    pub max_attempts: usize,
    /// Maximum accepted text length in characters
    pub max_text_length: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background reaper interval in seconds
    pub reaper_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CODE_TTL_SECS` - Entry lifetime in seconds (default: 1800)
    /// - `CODE_LENGTH` - Characters per code (default: 4)
    /// - `MAX_GENERATION_ATTEMPTS` - Random draws per put (default: 100)
    /// - `MAX_TEXT_LENGTH` - Text cap in characters (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REAPER_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_secs: env_or("CODE_TTL_SECS", defaults.ttl_secs),
            code_length: env_or("CODE_LENGTH", defaults.code_length),
            max_attempts: env_or("MAX_GENERATION_ATTEMPTS", defaults.max_attempts),
            max_text_length: env_or("MAX_TEXT_LENGTH", defaults.max_text_length),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            reaper_interval: env_or("REAPER_INTERVAL", defaults.reaper_interval),
        }
    }

    /// Builds the store options this configuration describes.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            ttl: Duration::from_secs(self.ttl_secs),
            code_length: self.code_length,
            alphabet: CODE_ALPHABET,
            max_attempts: self.max_attempts,
            max_text_length: self.max_text_length,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            code_length: CODE_LENGTH,
            max_attempts: MAX_GENERATION_ATTEMPTS,
            max_text_length: MAX_TEXT_LENGTH,
            server_port: 3000,
            reaper_interval: 60,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
