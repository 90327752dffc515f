//! API Module
//!
//! HTTP handlers and routing for the weather service REST API.
//!
//! # Endpoints
//! - `GET /weather` - Random-city conditions from Open-Meteo
//! - `GET /accuweather` - Random-city conditions from AccuWeather
//! - `GET /accuweather/search?q=...` - AccuWeather city search
//! - `GET /stats` - Cache behavior counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
