//! Response DTOs for the weather service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;
use crate::providers::accu_weather::{accu_icon, AccuWeatherInfo};
use crate::providers::cities::{AccuCity, City};
use crate::providers::open_meteo::{describe_weather_code, CurrentConditions};

/// City identification included in weather responses.
#[derive(Debug, Clone, Serialize)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl From<&City> for CityInfo {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.to_string(),
            country: city.country.to_string(),
            latitude: Some(city.latitude),
            longitude: Some(city.longitude),
        }
    }
}

impl From<&AccuCity> for CityInfo {
    fn from(city: &AccuCity) -> Self {
        Self {
            name: city.name.to_string(),
            country: city.country.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

/// Response body for GET /weather
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    /// The randomly chosen city
    pub city: CityInfo,
    /// Current conditions as fetched from Open-Meteo
    pub conditions: CurrentConditions,
    /// Human description of the weather code
    pub description: String,
    /// Icon glyph for the weather code
    pub icon: String,
    /// True when the conditions are stale data served after a failed fetch
    pub degraded: bool,
}

impl WeatherResponse {
    /// Creates a new WeatherResponse, deriving description and icon from
    /// the WMO weather code.
    pub fn new(city: &City, conditions: CurrentConditions, degraded: bool) -> Self {
        let (description, icon) = describe_weather_code(conditions.weather_code);
        Self {
            city: city.into(),
            conditions,
            description: description.to_string(),
            icon: icon.to_string(),
            degraded,
        }
    }
}

/// Response body for GET /accuweather
#[derive(Debug, Clone, Serialize)]
pub struct AccuWeatherResponse {
    /// The randomly chosen city
    pub city: CityInfo,
    /// Location metadata and current conditions (AccuWeather wire casing)
    pub info: AccuWeatherInfo,
    /// Icon glyph for the AccuWeather icon number
    pub icon: String,
    /// True when the conditions are stale data served after a failed fetch
    pub degraded: bool,
}

impl AccuWeatherResponse {
    /// Creates a new AccuWeatherResponse, deriving the icon glyph from the
    /// AccuWeather icon number.
    pub fn new(city: &AccuCity, info: AccuWeatherInfo, degraded: bool) -> Self {
        let icon = accu_icon(info.current.weather_icon).to_string();
        Self {
            city: city.into(),
            info,
            icon,
            degraded,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Open-Meteo cache counters
    pub weather: StatsSnapshot,
    /// AccuWeather cache counters
    pub accuweather: StatsSnapshot,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
