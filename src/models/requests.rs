//! Request DTOs for the weather service API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the city search endpoint
/// (GET /accuweather/search?q=...)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// City name fragment to search for
    pub q: String,
}

impl SearchParams {
    /// Validates the query.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("Search query cannot be empty".to_string());
        }
        if self.q.len() > 100 {
            return Some("Search query exceeds maximum length of 100 characters".to_string());
        }
        None
    }
}
