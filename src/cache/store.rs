//! Cache Store Module
//!
//! The stale-tolerant cache: a generic mapping from key to timestamped value
//! that serves fresh hits within a TTL window, fetches upstream on miss or
//! expiry, falls back to stale data when the fetch fails, and sheds old
//! entries on sweep.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tokio::sync::RwLock;
use tokio::time;
use tracing::warn;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::error::{Result, WeatherError};

// == Lookup ==
/// Outcome of a successful lookup.
///
/// A degraded lookup is still a success from the caller's point of view; the
/// variant keeps the degradation observable so response layers can flag it.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    /// Served from the cache within the TTL window; upstream was not called
    Fresh(V),
    /// Upstream fetch succeeded and the entry was refreshed
    Fetched(V),
    /// Upstream fetch failed; a previously fetched (stale) value was served
    Degraded(V),
}

impl<V> Lookup<V> {
    /// Returns a reference to the value regardless of how it was obtained.
    pub fn value(&self) -> &V {
        match self {
            Lookup::Fresh(v) | Lookup::Fetched(v) | Lookup::Degraded(v) => v,
        }
    }

    /// Consumes the lookup, returning the value.
    pub fn into_value(self) -> V {
        match self {
            Lookup::Fresh(v) | Lookup::Fetched(v) | Lookup::Degraded(v) => v,
        }
    }

    /// True when the value is stale data served after a failed fetch.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Lookup::Degraded(_))
    }
}

// == Stale Cache ==
/// Generic stale-tolerant cache over a caller-supplied fetch operation.
///
/// Instances share their interior behind an `Arc`, so cloning is cheap and a
/// clone can be handed to the background sweeper while handlers keep their
/// own. Construction is explicit; there is no ambient singleton.
#[derive(Debug)]
pub struct StaleCache<K, V> {
    /// Key-value storage
    entries: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    /// Behavior counters
    stats: Arc<CacheStats>,
    /// Age threshold beyond which the sweeper removes an entry
    retention: Duration,
    /// Deadline applied to every upstream fetch
    fetch_timeout: Duration,
}

impl<K, V> Clone for StaleCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            stats: Arc::clone(&self.stats),
            retention: self.retention,
            fetch_timeout: self.fetch_timeout,
        }
    }
}

impl<K, V> StaleCache<K, V>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new StaleCache.
    ///
    /// # Arguments
    /// * `retention` - Age at which the sweeper unconditionally drops an
    ///   entry. Configure it at or above the TTLs callers use, so fresh
    ///   entries are never swept mid-life.
    /// * `fetch_timeout` - Deadline for each upstream fetch; on expiry the
    ///   fetch counts as failed and the stale-fallback rules apply.
    pub fn new(retention: Duration, fetch_timeout: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(CacheStats::new()),
            retention,
            fetch_timeout,
        }
    }

    // == Get Or Fetch ==
    /// Answers "give me the value for this key", fetching upstream only when
    /// the cached entry is missing or older than `ttl`.
    ///
    /// On fetch success the entry is overwritten with `fetched_at = now`. On
    /// fetch failure a still-present (possibly stale) entry is served as a
    /// degraded result and the failure is suppressed; with no entry at all
    /// the failure propagates, wrapped with the key context.
    ///
    /// The cache never retries: each call performs at most one fetch
    /// attempt. Two concurrent misses for the same key may both fetch; the
    /// later completion's write wins.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, ttl: Duration, fetch: F) -> Result<Lookup<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<V>>,
    {
        // Fresh hit: answer from the map without calling upstream.
        // The read lock is released before the fetch await.
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if entry.is_fresh(ttl) {
                    self.stats.record_hit();
                    return Ok(Lookup::Fresh(entry.value.clone()));
                }
            }
        }

        let fetched = match time::timeout(self.fetch_timeout, fetch()).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!(
                "fetch timed out after {}s",
                self.fetch_timeout.as_secs()
            )),
        };

        match fetched {
            Ok(value) => {
                let mut entries = self.entries.write().await;
                entries.insert(key, CacheEntry::new(value.clone()));
                self.stats.record_refresh();
                Ok(Lookup::Fetched(value))
            }
            Err(err) => {
                // Degrade to whatever real data we still hold for this key
                let entries = self.entries.read().await;
                if let Some(entry) = entries.get(&key) {
                    warn!(key = %key, error = %err, "fetch failed, serving stale entry");
                    self.stats.record_degraded();
                    Ok(Lookup::Degraded(entry.value.clone()))
                } else {
                    self.stats.record_failure();
                    Err(WeatherError::fetch(key.to_string(), err))
                }
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age has reached the retention threshold.
    ///
    /// Returns the number of entries removed. Repeated sweeps with no new
    /// expirable entries remove nothing.
    pub async fn sweep(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.age() < self.retention);
        let removed = before - entries.len();
        self.stats.record_swept(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the behavior counters.
    pub async fn stats(&self) -> StatsSnapshot {
        let entries = self.entries.read().await;
        self.stats.snapshot(entries.len())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
