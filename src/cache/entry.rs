//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A fetched value together with the instant it was obtained.
///
/// Freshness is a derived property: an entry is fresh while its age is below
/// the caller-supplied TTL, stale afterwards. Nothing about staleness is
/// stored on the entry itself.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The fetched payload, opaque to the cache
    pub value: V,
    /// When the value was obtained from upstream
    pub fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    ///
    /// Stamping happens at store time, so successive stores for the same key
    /// always carry non-decreasing `fetched_at` values.
    pub fn new(value: V) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the value was fetched.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    // == Is Fresh ==
    /// Checks whether the entry is still fresh for the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is
    /// stale. Once the TTL duration has fully elapsed the entry must be
    /// refetched.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn test_entry_starts_fresh() {
        let entry = CacheEntry::new("value");

        assert!(entry.is_fresh(Duration::from_secs(300)));
        assert_eq!(entry.age(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_goes_stale_after_ttl() {
        let entry = CacheEntry::new("value");

        time::advance(Duration::from_secs(301)).await;

        assert!(!entry.is_fresh(Duration::from_secs(300)));
        assert!(entry.age() >= Duration::from_secs(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_freshness_boundary_condition() {
        let entry = CacheEntry::new("value");

        // Age exactly equal to the TTL means stale
        time::advance(Duration::from_secs(300)).await;

        assert!(!entry.is_fresh(Duration::from_secs(300)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_freshness_depends_on_caller_ttl() {
        let entry = CacheEntry::new("value");

        time::advance(Duration::from_secs(360)).await;

        // The same entry can be stale for one call site and fresh for another
        assert!(!entry.is_fresh(Duration::from_secs(300)));
        assert!(entry.is_fresh(Duration::from_secs(600)));
    }
}
