//! API Routes
//!
//! Configures the Axum router with all weather service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    accuweather_handler, health_handler, search_handler, stats_handler, weather_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /weather` - Random-city conditions from Open-Meteo
/// - `GET /accuweather` - Random-city conditions from AccuWeather
/// - `GET /accuweather/search?q=...` - AccuWeather city search
/// - `GET /stats` - Cache behavior counters
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(weather_handler))
        .route("/accuweather", get(accuweather_handler))
        .route("/accuweather/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
