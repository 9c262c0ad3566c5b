//! Cache Statistics Module
//!
//! Tracks hit, miss, set and delete counters for the response cache.

use serde::Serialize;

// == Cache Stats ==
/// Monotonic counters kept for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing or found an expired entry
    pub misses: u64,
    /// Writes, including overwrites
    pub sets: u64,
    /// Deletions that actually removed an entry
    pub deletes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of reads.
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_set(&mut self) {
        self.sets += 1;
    }

    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }
}

// == Snapshot ==
/// Point-in-time view of the cache: counters plus derived figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub deletes: u64,
    pub total_requests: u64,
    /// Ratio in `0.0..=1.0`
    pub hit_rate: f64,
    /// Number of entries currently held, expired-but-unswept included
    pub size: usize,
    /// Current keys in ascending order
    pub keys: Vec<String>,
}

impl CacheStatsSnapshot {
    /// Builds a snapshot from counters and the current key set.
    pub fn new(stats: &CacheStats, mut keys: Vec<String>) -> Self {
        keys.sort();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            sets: stats.sets,
            deletes: stats.deletes,
            total_requests: stats.total_requests(),
            hit_rate: stats.hit_rate(),
            size: keys.len(),
            keys,
        }
    }

    /// Hit rate as a percentage rounded to two decimals.
    pub fn hit_rate_percent(&self) -> f64 {
        (self.hit_rate * 10_000.0).round() / 100.0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.total_requests(), 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.25);
    }

    #[test]
    fn test_sets_and_deletes_do_not_count_as_requests() {
        let mut stats = CacheStats::new();
        stats.record_set();
        stats.record_set();
        stats.record_delete();
        assert_eq!(stats.sets, 2);
        assert_eq!(stats.deletes, 1);
        assert_eq!(stats.total_requests(), 0);
    }

    #[test]
    fn test_snapshot_sorts_keys_and_counts_size() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        let snapshot = CacheStatsSnapshot::new(&stats, vec!["b".into(), "a".into()]);

        assert_eq!(snapshot.keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(snapshot.size, 2);
        assert_eq!(snapshot.total_requests, 1);
        assert_eq!(snapshot.hit_rate, 1.0);
    }

    #[test]
    fn test_hit_rate_percent_rounding() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        let snapshot = CacheStatsSnapshot::new(&stats, Vec::new());
        assert_eq!(snapshot.hit_rate_percent(), 33.33);
    }
}
