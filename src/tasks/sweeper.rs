//! Cache Sweeper Task
//!
//! Background task that periodically removes cache entries older than the
//! retention threshold, independent of request traffic.

use std::fmt::Display;
use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::StaleCache;

/// Spawns a background task that sweeps the cache on a fixed cadence.
///
/// The task ticks on a `tokio::time::interval`; each tick takes the write
/// lock just long enough to drop entries past retention. Sweeping is pure
/// bookkeeping: it has no external dependencies and nothing to fail on.
///
/// The returned handle aborts the task on [`SweeperHandle::shutdown`] and on
/// drop, so a sweeper never outlives its cache or blocks process shutdown.
///
/// # Example
/// ```ignore
/// let cache: StaleCache<String, String> =
///     StaleCache::new(Duration::from_secs(900), Duration::from_secs(10));
/// let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.shutdown();
/// ```
pub fn spawn_sweeper<K, V>(cache: StaleCache<K, V>, interval: Duration) -> SweeperHandle
where
    K: Eq + Hash + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        info!("starting cache sweeper with interval of {}s", interval.as_secs());

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it so sweeps start one
        // full interval after spawn.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.sweep().await;

            if removed > 0 {
                info!(removed, "cache sweep removed aged entries");
            } else {
                debug!("cache sweep: nothing past retention");
            }
        }
    });

    SweeperHandle { handle }
}

// == Sweeper Handle ==
/// Owns the background sweep task for one cache instance.
#[derive(Debug)]
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweep task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    /// Returns true once the task has stopped running.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
