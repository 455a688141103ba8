//! Codeshare - Short-lived text sharing through four-character codes
//!
//! Stores a text under a random code for thirty minutes; anyone holding the
//! code can read it back until it expires.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use store::{CodeStore, SharedStore, StoreOptions};
pub use tasks::spawn_reaper_task;
