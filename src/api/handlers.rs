//! API Handlers
//!
//! HTTP request handlers for each weather service endpoint. Each provider
//! endpoint picks a random city and answers through its stale-tolerant
//! cache, so a flaky upstream degrades to recent data instead of failing.

use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::StaleCache;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{
    AccuWeatherResponse, HealthResponse, SearchParams, StatsResponse, WeatherResponse,
};
use crate::providers::accu_weather::{AccuLocation, AccuWeatherClient, AccuWeatherInfo};
use crate::providers::cities;
use crate::providers::open_meteo::{coord_key, CurrentConditions, OpenMeteoClient};

/// Application state shared across all handlers.
///
/// Holds one cache instance per provider; both are explicitly constructed
/// here and injected, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Cache for Open-Meteo conditions, keyed by coordinates
    pub weather_cache: StaleCache<String, CurrentConditions>,
    /// Cache for AccuWeather payloads, keyed by location key
    pub accu_cache: StaleCache<String, AccuWeatherInfo>,
    /// Open-Meteo client
    pub open_meteo: OpenMeteoClient,
    /// AccuWeather client
    pub accu_weather: AccuWeatherClient,
    /// Freshness window for Open-Meteo lookups
    pub weather_ttl: Duration,
    /// Freshness window for AccuWeather lookups
    pub accuweather_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let retention = config.retention();
        let fetch_timeout = config.fetch_timeout();

        Self {
            weather_cache: StaleCache::new(retention, fetch_timeout),
            accu_cache: StaleCache::new(retention, fetch_timeout),
            open_meteo: OpenMeteoClient::new(),
            accu_weather: AccuWeatherClient::new(config.accuweather_api_key.clone()),
            weather_ttl: config.weather_ttl(),
            accuweather_ttl: config.accuweather_ttl(),
        }
    }
}

/// Handler for GET /weather
///
/// Picks a random city and returns its current Open-Meteo conditions. The
/// `degraded` field is true when the value is stale data served because the
/// upstream fetch failed.
pub async fn weather_handler(State(state): State<AppState>) -> Result<Json<WeatherResponse>> {
    let city = cities::random_city();
    let key = coord_key(city.latitude, city.longitude);

    let client = state.open_meteo.clone();
    let lookup = state
        .weather_cache
        .get_or_fetch(key, state.weather_ttl, || async move {
            client.fetch_current(city.latitude, city.longitude).await
        })
        .await?;

    let degraded = lookup.is_degraded();
    Ok(Json(WeatherResponse::new(
        city,
        lookup.into_value(),
        degraded,
    )))
}

/// Handler for GET /accuweather
///
/// Picks a random city and returns its AccuWeather location metadata and
/// current conditions, with the same degradation semantics as /weather.
pub async fn accuweather_handler(
    State(state): State<AppState>,
) -> Result<Json<AccuWeatherResponse>> {
    let city = cities::random_accu_city();

    let client = state.accu_weather.clone();
    let lookup = state
        .accu_cache
        .get_or_fetch(
            city.location_key.to_string(),
            state.accuweather_ttl,
            || async move { client.fetch_info(city.location_key).await },
        )
        .await?;

    let degraded = lookup.is_degraded();
    Ok(Json(AccuWeatherResponse::new(
        city,
        lookup.into_value(),
        degraded,
    )))
}

/// Handler for GET /accuweather/search
///
/// Proxies the AccuWeather city search. Results are not cached; they are
/// user-interactive and short-lived.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<AccuLocation>>> {
    if let Some(error_msg) = params.validate() {
        return Err(WeatherError::InvalidRequest(error_msg));
    }

    let locations = state
        .accu_weather
        .search_city(&params.q)
        .await
        .map_err(WeatherError::Upstream)?;

    Ok(Json(locations))
}

/// Handler for GET /stats
///
/// Returns behavior counters for both provider caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let weather = state.weather_cache.stats().await;
    let accuweather = state.accu_cache.stats().await;

    Json(StatsResponse {
        weather,
        accuweather,
    })
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
