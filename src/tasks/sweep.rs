//! Cache Sweep Task
//!
//! Background task that periodically evicts expired cache entries, so keys
//! that are written once and never read again do not accumulate.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a task that calls `sweep()` on the shared cache every
/// `interval_ms` milliseconds.
///
/// The first sweep happens one full interval after spawning. The returned
/// handle is aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = cache::shared(TtlCache::default());
/// let sweep_handle = spawn_sweep_task(cache.clone(), 600_000);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: SharedCache, interval_ms: u64) -> JoinHandle<()> {
    let interval = Duration::from_millis(interval_ms.max(1));

    tokio::spawn(async move {
        info!(interval_ms, "Starting cache sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache sweep removed expired entries");
            } else {
                debug!(remaining, "Cache sweep found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{shared, TtlCache};
    use serde_json::json;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = shared(TtlCache::default());
        cache.write().await.set("cache:/expire-soon", json!(1), 200);

        let handle = spawn_sweep_task(cache.clone(), 300);

        tokio::time::sleep(Duration::from_millis(800)).await;

        // Checked without `get` so the removal is the sweep's doing
        {
            let cache_guard = cache.read().await;
            assert!(!cache_guard.contains_key("cache:/expire-soon"));
            assert_eq!(cache_guard.stats().misses, 0);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let cache = shared(TtlCache::default());
        cache.write().await.set("cache:/long-lived", json!("value"), 3_600_000);

        let handle = spawn_sweep_task(cache.clone(), 100);

        tokio::time::sleep(Duration::from_millis(350)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("cache:/long-lived"), Some(json!("value")));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = shared(TtlCache::default());

        let handle = spawn_sweep_task(cache, 1000);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
