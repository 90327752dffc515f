//! AccuWeather API client
//!
//! Fetches location metadata and current conditions by AccuWeather location
//! key, and proxies the city search endpoint. All calls require an API key;
//! without one every call fails below the cache boundary, which the cache
//! treats like any other fetch failure.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Base URL for the AccuWeather data service
const ACCUWEATHER_BASE_URL: &str = "https://dataservice.accuweather.com";

/// Maximum number of city search results passed through to callers
const SEARCH_RESULT_LIMIT: usize = 5;

// == Payloads ==
/// A location as returned by the AccuWeather locations endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuLocation {
    /// AccuWeather location key
    pub key: String,
    /// Display name of the location
    pub localized_name: String,
    #[serde(default)]
    pub country: Option<AccuCountry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuCountry {
    #[serde(rename = "ID")]
    pub id: String,
    pub localized_name: String,
}

/// Current conditions as returned by the current-conditions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuCurrent {
    /// Observation time, ISO 8601
    pub local_observation_date_time: String,
    /// Phrase describing the conditions
    pub weather_text: String,
    /// AccuWeather icon number
    pub weather_icon: u8,
    pub is_day_time: bool,
    pub temperature: AccuTemperature,
    #[serde(default)]
    pub relative_humidity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuTemperature {
    pub metric: AccuUnit,
    pub imperial: AccuUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccuUnit {
    pub value: f64,
    pub unit: String,
}

/// Location metadata and current conditions combined; this is the cached
/// value for the AccuWeather side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuWeatherInfo {
    pub location: AccuLocation,
    pub current: AccuCurrent,
}

// == Client ==
/// Client for the AccuWeather data service.
#[derive(Debug, Clone)]
pub struct AccuWeatherClient {
    client: Client,
    api_key: Option<String>,
}

impl AccuWeatherClient {
    /// Creates a new client. Pass `None` when no key is configured; calls
    /// will then fail with a configuration error.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    fn api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .context("AccuWeather API key is not configured")
    }

    /// Fetches location metadata for a location key.
    pub async fn fetch_location(&self, location_key: &str) -> anyhow::Result<AccuLocation> {
        let api_key = self.api_key()?;
        let url = format!("{}/locations/v1/{}", ACCUWEATHER_BASE_URL, location_key);

        let location = self
            .client
            .get(&url)
            .query(&[("apikey", api_key), ("language", "en-us")])
            .send()
            .await
            .context("accuweather location request failed")?
            .error_for_status()
            .context("accuweather location returned an error status")?
            .json()
            .await
            .context("failed to decode accuweather location payload")?;

        Ok(location)
    }

    /// Fetches current conditions for a location key.
    ///
    /// The endpoint answers with a one-element array; the first element is
    /// the observation.
    pub async fn fetch_conditions(&self, location_key: &str) -> anyhow::Result<AccuCurrent> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/currentconditions/v1/{}",
            ACCUWEATHER_BASE_URL, location_key
        );

        let observations: Vec<AccuCurrent> = self
            .client
            .get(&url)
            .query(&[
                ("apikey", api_key),
                ("language", "en-us"),
                ("details", "true"),
            ])
            .send()
            .await
            .context("accuweather conditions request failed")?
            .error_for_status()
            .context("accuweather conditions returned an error status")?
            .json()
            .await
            .context("failed to decode accuweather conditions payload")?;

        observations
            .into_iter()
            .next()
            .context("accuweather returned no observations")
    }

    /// Fetches location metadata and current conditions concurrently and
    /// combines them.
    pub async fn fetch_info(&self, location_key: &str) -> anyhow::Result<AccuWeatherInfo> {
        let (location, current) = tokio::try_join!(
            self.fetch_location(location_key),
            self.fetch_conditions(location_key)
        )?;

        Ok(AccuWeatherInfo { location, current })
    }

    /// Searches cities by name, truncated to the first few matches.
    pub async fn search_city(&self, query: &str) -> anyhow::Result<Vec<AccuLocation>> {
        let api_key = self.api_key()?;
        let url = format!("{}/locations/v1/cities/search", ACCUWEATHER_BASE_URL);

        let mut locations: Vec<AccuLocation> = self
            .client
            .get(&url)
            .query(&[("apikey", api_key), ("q", query), ("language", "en-us")])
            .send()
            .await
            .context("accuweather search request failed")?
            .error_for_status()
            .context("accuweather search returned an error status")?
            .json()
            .await
            .context("failed to decode accuweather search payload")?;

        locations.truncate(SEARCH_RESULT_LIMIT);
        Ok(locations)
    }
}

// == Icons ==
/// Maps an AccuWeather icon number to an icon glyph.
pub fn accu_icon(code: u8) -> &'static str {
    match code {
        1 | 2 => "☀️",
        3 | 4 => "🌤️",
        5 => "⛅",
        6..=8 => "☁️",
        11 => "🌫️",
        12..=14 => "🌧️",
        15..=17 => "⛈️",
        18 => "🌧️",
        19..=26 | 29 => "🌨️",
        30 | 31 => "🌫️",
        32 => "💨",
        33..=35 => "🌙",
        36..=38 => "☁️",
        39 | 40 => "🌧️",
        41 | 42 => "⛈️",
        43 | 44 => "🌨️",
        _ => "❓",
    }
}
