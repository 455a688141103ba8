//! API Handlers
//!
//! HTTP request handlers for each code share endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ShareError};
use crate::models::{GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse};
use crate::store::{normalize_code, CodeStore, SharedStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe code store
    pub store: SharedStore,
    /// Characters per code, used to normalize incoming codes
    pub code_length: usize,
    /// Text cap checked before the store is locked
    pub max_text_length: usize,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: CodeStore) -> Self {
        let code_length = store.options().code_length;
        let max_text_length = store.options().max_text_length;
        Self {
            store: Arc::new(RwLock::new(store)),
            code_length,
            max_text_length,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CodeStore::with_options(config.store_options()))
    }
}

/// Normalizes the code path parameter.
///
/// A path that cannot be decoded can never name a stored code, so it is
/// reported as not found.
fn code_from_path(
    path: std::result::Result<Path<String>, PathRejection>,
    code_length: usize,
) -> Result<String> {
    match path {
        Ok(Path(raw_code)) => Ok(normalize_code(&raw_code, code_length)),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Rejected code path");
            Err(ShareError::NotFound(String::new()))
        }
    }
}

/// Handler for POST /drops
///
/// Stores a text and returns the code it can be read with.
pub async fn put_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PutRequest>, JsonRejection>,
) -> Result<Json<PutResponse>> {
    let Json(req) = payload.map_err(|rejection| ShareError::InvalidRequest(rejection.body_text()))?;
    req.validate(state.max_text_length)?;

    let (code, entry) = state.store.write().await.put_entry(&req.text)?;
    debug!(code = %code, "Issued code");

    Ok(Json(PutResponse::new(code, &entry)))
}

/// Handler for GET /drops/:code
///
/// Returns the text stored under a code. The entry stays readable until it
/// expires.
pub async fn get_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<GetResponse>> {
    let code = code_from_path(path, state.code_length)?;

    // Write lock: an expired entry is evicted on read
    let entry = state.store.write().await.lookup(&code);

    match entry {
        Some(entry) => Ok(Json(GetResponse::new(code, entry))),
        None => Err(ShareError::NotFound(code)),
    }
}

/// Handler for DELETE /drops/:code
///
/// Returns the text stored under a code and removes it, so the code works
/// only once.
pub async fn claim_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<GetResponse>> {
    let code = code_from_path(path, state.code_length)?;

    let entry = state.store.write().await.take(&code);

    match entry {
        Some(entry) => {
            debug!(code = %code, "Claimed entry");
            Ok(Json(GetResponse::new(code, entry)))
        }
        None => Err(ShareError::NotFound(code)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.read().await;
    let live_entries = store.live_count();

    Json(StatsResponse::new(&store.stats(), live_entries))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
