//! Open-Meteo API client
//!
//! Fetches current conditions for a coordinate pair from the Open-Meteo
//! forecast API and parses them into typed structures. Open-Meteo needs no
//! API key.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Base URL for the Open-Meteo forecast API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Fields requested from the `current` block of the forecast endpoint
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,\
precipitation,rain,showers,snowfall,weather_code,cloud_cover,pressure_msl,surface_pressure,\
wind_speed_10m,wind_direction_10m,wind_gusts_10m";

/// Builds the cache key for a coordinate pair.
pub fn coord_key(latitude: f64, longitude: f64) -> String {
    format!("{},{}", latitude, longitude)
}

// == Payloads ==
/// Current conditions as reported by Open-Meteo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time (unix seconds)
    pub time: i64,
    /// Air temperature at 2m, °C
    pub temperature_2m: f64,
    /// Relative humidity at 2m, percent
    pub relative_humidity_2m: f64,
    /// Feels-like temperature, °C
    pub apparent_temperature: f64,
    /// 1 when the sun is up
    pub is_day: u8,
    /// Total precipitation, mm
    pub precipitation: f64,
    pub rain: f64,
    pub showers: f64,
    pub snowfall: f64,
    /// WMO weather interpretation code
    pub weather_code: u16,
    /// Cloud cover, percent
    pub cloud_cover: f64,
    /// Sea-level pressure, hPa
    pub pressure_msl: f64,
    /// Surface pressure, hPa
    pub surface_pressure: f64,
    /// Wind speed at 10m, km/h
    pub wind_speed_10m: f64,
    /// Wind direction at 10m, degrees
    pub wind_direction_10m: f64,
    /// Wind gusts at 10m, km/h
    pub wind_gusts_10m: f64,
}

/// Envelope of the forecast endpoint; only the parts we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: CurrentConditions,
}

// == Client ==
/// Client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    /// Creates a new client with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn forecast_url(latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone=auto&timeformat=unixtime",
            OPEN_METEO_BASE_URL, latitude, longitude, CURRENT_FIELDS
        )
    }

    /// Fetches current conditions for the given coordinates.
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<CurrentConditions> {
        let url = Self::forecast_url(latitude, longitude);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("open-meteo request failed")?
            .error_for_status()
            .context("open-meteo returned an error status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to decode open-meteo payload")?;

        Ok(payload.current)
    }
}

// == Weather Codes ==
/// Maps a WMO weather code to a human description and an icon glyph.
///
/// Unknown codes fall back to a neutral placeholder rather than failing the
/// response.
pub fn describe_weather_code(code: u16) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mostly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Depositing rime fog", "🌫️"),
        51 | 53 => ("Light drizzle", "🌦️"),
        55 => ("Dense drizzle", "🌧️"),
        56 => ("Light freezing drizzle", "🌨️"),
        57 => ("Dense freezing drizzle", "🌨️"),
        61 => ("Slight rain", "🌧️"),
        63 => ("Moderate rain", "🌧️"),
        65 => ("Heavy rain", "⛈️"),
        66 => ("Light freezing rain", "🌨️"),
        67 => ("Heavy freezing rain", "🌨️"),
        71 => ("Slight snowfall", "🌨️"),
        73 => ("Moderate snowfall", "❄️"),
        75 => ("Heavy snowfall", "❄️"),
        77 => ("Snow grains", "🌨️"),
        80 => ("Slight rain showers", "🌦️"),
        81 => ("Moderate rain showers", "🌧️"),
        82 => ("Violent rain showers", "⛈️"),
        85 => ("Slight snow showers", "🌨️"),
        86 => ("Heavy snow showers", "❄️"),
        95 => ("Thunderstorm", "⛈️"),
        96 => ("Thunderstorm with slight hail", "⛈️"),
        99 => ("Thunderstorm with heavy hail", "⛈️"),
        _ => ("Unknown", "❓"),
    }
}
