//! Weather Provider Integrations
//!
//! HTTP clients and typed payloads for the two upstream weather APIs, plus
//! the static city lists the random endpoints draw from.

pub mod accu_weather;
pub mod cities;
pub mod open_meteo;

pub use accu_weather::{AccuWeatherClient, AccuWeatherInfo};
pub use cities::{random_accu_city, random_city};
pub use open_meteo::{coord_key, CurrentConditions, OpenMeteoClient};
