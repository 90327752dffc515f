//! Integration Tests for the Cache Lifecycle
//!
//! Drives a full entry lifecycle — fetch, fresh hit, degraded serve,
//! refresh, sweep — against the public API on a paused tokio clock.

use std::time::Duration;

use anyhow::anyhow;
use weather_hub::error::WeatherError;
use weather_hub::{spawn_sweeper, Lookup, StaleCache};

const TTL: Duration = Duration::from_secs(300);
const RETENTION: Duration = Duration::from_secs(600);
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Lets background tasks catch up with the advanced clock.
async fn drain() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

// Walks one key through every state: ABSENT -> FRESH -> STALE (degraded)
// -> FRESH again -> swept back to ABSENT.
#[tokio::test(start_paused = true)]
async fn entry_lifecycle_with_running_sweeper() {
    let cache: StaleCache<String, String> = StaleCache::new(RETENTION, FETCH_TIMEOUT);
    let _sweeper = spawn_sweeper(cache.clone(), SWEEP_INTERVAL);

    // t=0: first lookup fetches and stores
    let lookup = cache
        .get_or_fetch("paris".to_string(), TTL, || async { Ok("v1".to_string()) })
        .await
        .unwrap();
    assert_eq!(lookup, Lookup::Fetched("v1".to_string()));

    // t=4min: still inside the TTL window, served without fetching
    tokio::time::advance(Duration::from_secs(240)).await;
    drain().await;
    let lookup = cache
        .get_or_fetch("paris".to_string(), TTL, || async {
            panic!("fresh hit must not fetch")
        })
        .await
        .unwrap();
    assert_eq!(lookup, Lookup::Fresh("v1".to_string()));

    // t=6min: stale; a failing refetch degrades to the previous value
    tokio::time::advance(Duration::from_secs(120)).await;
    drain().await;
    let lookup = cache
        .get_or_fetch("paris".to_string(), TTL, || async {
            Err(anyhow!("upstream unavailable"))
        })
        .await
        .unwrap();
    assert!(lookup.is_degraded());
    assert_eq!(lookup.into_value(), "v1".to_string());

    // Still t=6min: a successful refetch resets the freshness clock
    let lookup = cache
        .get_or_fetch("paris".to_string(), TTL, || async { Ok("v2".to_string()) })
        .await
        .unwrap();
    assert_eq!(lookup, Lookup::Fetched("v2".to_string()));

    // t=16min: the entry aged past retention; the sweeper removed it
    tokio::time::advance(RETENTION).await;
    drain().await;
    assert!(cache.is_empty().await);

    // Post-sweep the key is absent again: a failing fetch has no fallback
    let result = cache
        .get_or_fetch("paris".to_string(), TTL, || async {
            Err(anyhow!("upstream unavailable"))
        })
        .await;
    assert!(matches!(result, Err(WeatherError::Fetch { .. })));
}

// A stale-but-retained entry must survive sweeps: the degraded window is
// exactly the gap between TTL and retention.
#[tokio::test(start_paused = true)]
async fn sweeper_preserves_the_degraded_window() {
    let cache: StaleCache<String, String> = StaleCache::new(RETENTION, FETCH_TIMEOUT);
    let _sweeper = spawn_sweeper(cache.clone(), SWEEP_INTERVAL);

    cache
        .get_or_fetch("tokyo".to_string(), TTL, || async { Ok("v1".to_string()) })
        .await
        .unwrap();

    // Past the TTL, short of retention; sweeps have run in between
    tokio::time::advance(Duration::from_secs(420)).await;
    drain().await;
    assert_eq!(cache.len().await, 1);

    // The stale entry still backs up a failing refetch
    let lookup = cache
        .get_or_fetch("tokyo".to_string(), TTL, || async {
            Err(anyhow!("upstream unavailable"))
        })
        .await
        .unwrap();
    assert!(lookup.is_degraded());
    assert_eq!(lookup.into_value(), "v1".to_string());
}
