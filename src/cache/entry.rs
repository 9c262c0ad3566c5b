//! Cache Entry Module
//!
//! Defines a single cached JSON response together with its expiry time.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A cached JSON value with creation and expiry timestamps.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored JSON payload
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl_ms` milliseconds from now.
    pub fn new(value: Value, ttl_ms: u64) -> Self {
        Self::new_at(value, ttl_ms, current_timestamp_ms())
    }

    /// Creates a new entry as if it had been stored at `now`.
    pub fn new_at(value: Value, ttl_ms: u64, now: u64) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale when read at `now`.
    ///
    /// An entry stays readable up to and including its expiry instant; it is
    /// expired only once `now` has moved strictly past `expires_at`.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }

    /// Checks if the entry is stale right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Sweepable ==
    /// Checks if a sweep running at `now` should drop this entry.
    ///
    /// The sweep is inclusive: an entry whose expiry equals the sweep time
    /// is removed.
    pub fn is_sweepable_at(&self, now: u64) -> bool {
        self.expires_at <= now
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
