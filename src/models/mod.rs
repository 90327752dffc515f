//! Request and Response models for the weather service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SearchParams;
pub use responses::{
    AccuWeatherResponse, CityInfo, HealthResponse, StatsResponse, WeatherResponse,
};
