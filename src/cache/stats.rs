//! Cache Statistics Module
//!
//! Tracks cache behavior including fresh hits, refreshes, and degraded serves.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Counters for cache behavior.
///
/// Counters are atomics so the fresh-hit path can record without taking the
/// write lock on the entry map.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups served from a fresh entry without fetching
    hits: AtomicU64,
    /// Lookups that fetched upstream and stored a new entry
    refreshes: AtomicU64,
    /// Lookups that served a stale entry because the fetch failed
    degraded: AtomicU64,
    /// Lookups that failed with no entry to fall back on
    failures: AtomicU64,
    /// Entries removed by the sweeper
    swept: AtomicU64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup served from a fresh entry.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful upstream fetch.
    pub fn record_refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a stale entry served after a failed fetch.
    pub fn record_degraded(&self) {
        self.degraded.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a fetch failure with no fallback entry.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records entries removed by a sweep.
    pub fn record_swept(&self, count: usize) {
        self.swept.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of all counters.
    pub fn snapshot(&self, entries: usize) -> StatsSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let refreshes = self.refreshes.load(Ordering::Relaxed);
        let degraded = self.degraded.load(Ordering::Relaxed);
        let failures = self.failures.load(Ordering::Relaxed);

        let total = hits + refreshes + degraded + failures;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        StatsSnapshot {
            hits,
            refreshes,
            degraded,
            failures,
            swept: self.swept.load(Ordering::Relaxed),
            entries,
            hit_rate,
        }
    }
}

// == Stats Snapshot ==
/// Serializable point-in-time view of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups that fetched upstream successfully
    pub refreshes: u64,
    /// Lookups that served stale data after a failed fetch
    pub degraded: u64,
    /// Lookups that failed outright
    pub failures: u64,
    /// Entries removed by the sweeper
    pub swept: u64,
    /// Current number of entries in the cache
    pub entries: usize,
    /// Fraction of lookups answered without fetching
    pub hit_rate: f64,
}
