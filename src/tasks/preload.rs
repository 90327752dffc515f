//! Cache Warm-Up Task
//!
//! One-shot task that primes the weather cache with a random city at
//! startup, so the first visitor is likely to land on a fresh entry.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::AppState;
use crate::providers::cities;
use crate::providers::open_meteo::coord_key;

/// Spawns a task that fetches one random city into the weather cache.
///
/// Warm-up is best-effort: a failure is logged at debug level and otherwise
/// ignored, exactly like a cold cache.
pub fn spawn_preload(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let city = cities::random_city();
        let key = coord_key(city.latitude, city.longitude);

        let client = state.open_meteo.clone();
        let result = state
            .weather_cache
            .get_or_fetch(key, state.weather_ttl, || async move {
                client.fetch_current(city.latitude, city.longitude).await
            })
            .await;

        match result {
            Ok(_) => debug!(city = city.name, "weather cache warmed"),
            Err(err) => debug!(error = %err, "cache warm-up failed"),
        }
    })
}
