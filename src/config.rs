//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables.

use std::env;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The retention threshold should sit at or above the provider
/// TTLs so fresh entries are never swept mid-life.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Freshness window for Open-Meteo lookups, seconds
    pub weather_ttl_secs: u64,
    /// Freshness window for AccuWeather lookups, seconds
    pub accuweather_ttl_secs: u64,
    /// Age at which the sweeper drops entries, seconds
    pub retention_secs: u64,
    /// Sweeper cadence, seconds
    pub sweep_interval_secs: u64,
    /// Deadline for each upstream fetch, seconds
    pub fetch_timeout_secs: u64,
    /// AccuWeather API key; AccuWeather endpoints fail without it
    pub accuweather_api_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `WEATHER_TTL_SECS` - Open-Meteo freshness window (default: 300)
    /// - `ACCUWEATHER_TTL_SECS` - AccuWeather freshness window (default: 600)
    /// - `CACHE_RETENTION_SECS` - sweep threshold (default: 900)
    /// - `SWEEP_INTERVAL_SECS` - sweeper cadence (default: 60)
    /// - `FETCH_TIMEOUT_SECS` - upstream fetch deadline (default: 10)
    /// - `ACCUWEATHER_API_KEY` - AccuWeather credentials (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            weather_ttl_secs: env::var("WEATHER_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            accuweather_ttl_secs: env::var("ACCUWEATHER_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            retention_secs: env::var("CACHE_RETENTION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            accuweather_api_key: env::var("ACCUWEATHER_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Freshness window for Open-Meteo lookups.
    pub fn weather_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_ttl_secs)
    }

    /// Freshness window for AccuWeather lookups.
    pub fn accuweather_ttl(&self) -> Duration {
        Duration::from_secs(self.accuweather_ttl_secs)
    }

    /// Age threshold used by the sweeper.
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }

    /// Sweeper cadence.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Deadline applied to each upstream fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            weather_ttl_secs: 300,
            accuweather_ttl_secs: 600,
            retention_secs: 900,
            sweep_interval_secs: 60,
            fetch_timeout_secs: 10,
            accuweather_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.weather_ttl_secs, 300);
        assert_eq!(config.accuweather_ttl_secs, 600);
        assert_eq!(config.retention_secs, 900);
        assert_eq!(config.sweep_interval_secs, 60);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert!(config.accuweather_api_key.is_none());
    }

    #[test]
    fn test_config_durations() {
        let config = Config::default();
        assert_eq!(config.weather_ttl(), Duration::from_secs(300));
        assert_eq!(config.accuweather_ttl(), Duration::from_secs(600));
        assert_eq!(config.retention(), Duration::from_secs(900));
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("WEATHER_TTL_SECS");
        env::remove_var("ACCUWEATHER_TTL_SECS");
        env::remove_var("CACHE_RETENTION_SECS");
        env::remove_var("SWEEP_INTERVAL_SECS");
        env::remove_var("FETCH_TIMEOUT_SECS");
        env::remove_var("ACCUWEATHER_API_KEY");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.weather_ttl_secs, 300);
        assert_eq!(config.accuweather_ttl_secs, 600);
        assert_eq!(config.retention_secs, 900);
        assert_eq!(config.sweep_interval_secs, 60);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert!(config.accuweather_api_key.is_none());
    }

    #[test]
    fn test_retention_covers_both_ttls() {
        // Default retention must not sweep entries that are merely stale
        let config = Config::default();
        assert!(config.retention() >= config.weather_ttl());
        assert!(config.retention() >= config.accuweather_ttl());
    }
}
