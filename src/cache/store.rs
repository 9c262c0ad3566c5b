//! TTL Cache Store Module
//!
//! HashMap-backed JSON cache with per-entry expiry, lazy expiry on read,
//! an explicit sweep, and substring-based bulk invalidation.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, CacheStatsSnapshot, DEFAULT_TTL_MS};

// == TTL Cache ==
/// In-memory key/value store where every entry carries its own expiry.
///
/// Capacity is unbounded; entries leave only through `delete`, `clear`,
/// expiry on read, or `sweep`.
#[derive(Debug)]
pub struct TtlCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lifetime counters
    stats: CacheStats,
    /// TTL applied by `set_default`
    default_ttl_ms: u64,
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache whose `set_default` uses `default_ttl_ms`.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    /// TTL used by `set_default`.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its expiry to `now + ttl_ms`.
    pub fn set(&mut self, key: impl Into<String>, value: Value, ttl_ms: u64) {
        self.insert(key.into(), CacheEntry::new(value, ttl_ms));
    }

    /// Like `set`, with an explicit clock reading.
    pub fn set_at(&mut self, key: impl Into<String>, value: Value, ttl_ms: u64, now: u64) {
        self.insert(key.into(), CacheEntry::new_at(value, ttl_ms, now));
    }

    /// Stores `value` with the cache's default TTL.
    pub fn set_default(&mut self, key: impl Into<String>, value: Value) {
        let ttl = self.default_ttl_ms;
        self.set(key, value, ttl);
    }

    fn insert(&mut self, key: String, entry: CacheEntry) {
        debug!(key = %key, ttl_ms = entry.expires_at - entry.created_at, "cache set");
        self.entries.insert(key, entry);
        self.stats.record_set();
    }

    // == Get ==
    /// Returns the live value for `key`.
    ///
    /// A missing key and an expired key both count as a miss; an expired
    /// entry is removed as part of the lookup.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Like `get`, with an explicit clock reading.
    pub fn get_at(&mut self, key: &str, now: u64) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                debug!(key, "cache hit");
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_miss();
                debug!(key, "cache expired");
                None
            }
            None => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Delete ==
    /// Removes `key`. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.stats.record_delete();
            debug!(key, "cache delete");
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Drops every entry. Counters are left as they are.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("cache cleared");
    }

    // == Sweep ==
    /// Removes every entry whose expiry is at or before the current time.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(current_timestamp_ms())
    }

    /// Like `sweep`, with an explicit clock reading.
    pub fn sweep_at(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_sweepable_at(now));
        before - self.entries.len()
    }

    // == Invalidate Matching ==
    /// Deletes every key that contains `pattern` as a substring.
    ///
    /// Matching is coarse: `"product"` removes every cached
    /// `/product/...` response, list pages included. Each removal goes
    /// through `delete` and is counted. Returns the number of keys removed.
    pub fn invalidate_matching(&mut self, pattern: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();

        matching.iter().filter(|key| self.delete(key)).count()
    }

    // == Keys ==
    /// Returns the keys currently held, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Stats ==
    /// Returns counters plus hit rate, size and key listing.
    pub fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot::new(&self.stats, self.keys())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is held, without touching counters or expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
