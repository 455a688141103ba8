//! Expiry Reaper Task
//!
//! Background task that periodically removes expired entries so idle codes do
//! not hold memory until someone happens to look them up.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::SharedStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task sleeps for `interval` between runs and holds the store's write
/// lock only for the duration of a single sweep.
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CodeStore::new()));
/// let reaper_handle = spawn_reaper_task(store.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// reaper_handle.abort();
/// ```
pub fn spawn_reaper_task(store: SharedStore, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting expiry reaper with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.sweep_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Reaper removed expired entries");
            } else {
                debug!(remaining, "Reaper found no expired entries");
            }
        }
    })
}
