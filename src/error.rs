//! Error types for the weather service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Weather Error Enum ==
/// Unified error type for the weather service.
///
/// A degraded lookup (stale value served because a refetch failed) is NOT an
/// error; it surfaces as `Lookup::Degraded` from the cache instead.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Upstream fetch failed and no cached entry existed to fall back on
    #[error("fetch failed for '{key}': {source}")]
    Fetch {
        /// The cache key the fetch was issued for
        key: String,
        /// The underlying fetch failure (network, timeout, bad payload)
        #[source]
        source: anyhow::Error,
    },

    /// An uncached upstream call failed (e.g. city search)
    #[error("upstream request failed: {0}")]
    Upstream(#[source] anyhow::Error),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl WeatherError {
    /// Creates a `Fetch` error carrying the key context.
    pub fn fetch(key: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Fetch {
            key: key.into(),
            source,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = match &self {
            WeatherError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            WeatherError::Upstream(_) => StatusCode::BAD_GATEWAY,
            WeatherError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather service.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (
                WeatherError::fetch("paris", anyhow!("connection refused")),
                StatusCode::BAD_GATEWAY,
            ),
            (
                WeatherError::Upstream(anyhow!("503 from upstream")),
                StatusCode::BAD_GATEWAY,
            ),
            (
                WeatherError::InvalidRequest("empty query".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_fetch_error_carries_key_context() {
        let error = WeatherError::fetch("48.8566,2.3522", anyhow!("timed out"));
        let message = error.to_string();
        assert!(message.contains("48.8566,2.3522"));
        assert!(message.contains("timed out"));
    }
}
