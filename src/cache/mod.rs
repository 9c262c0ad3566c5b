//! Cache Module
//!
//! In-memory JSON response cache with per-entry TTL, periodic sweeping and
//! substring-pattern invalidation.

mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::TtlCache;

/// Handle through which the middleware, the stats endpoint and the sweep
/// task share one cache instance.
pub type SharedCache = Arc<RwLock<TtlCache>>;

/// Wraps a cache in a shareable handle.
pub fn shared(cache: TtlCache) -> SharedCache {
    Arc::new(RwLock::new(cache))
}

// == Public Constants ==
/// TTL used when a caller does not pick one (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Interval between background sweeps (10 minutes)
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 600_000;

/// Prefix shared by every response-cache key
pub const KEY_PREFIX: &str = "cache:";
