//! City Lists
//!
//! Static city data the random-weather endpoints draw from: coordinates for
//! Open-Meteo, location keys for AccuWeather.

use rand::seq::SliceRandom;

// == Cities ==
/// A city addressable by coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Cities served by the Open-Meteo endpoint.
pub const CITIES: &[City] = &[
    City { name: "Beijing", country: "China", latitude: 39.9042, longitude: 116.4074 },
    City { name: "Shanghai", country: "China", latitude: 31.2304, longitude: 121.4737 },
    City { name: "Guangzhou", country: "China", latitude: 23.1291, longitude: 113.2644 },
    City { name: "Shenzhen", country: "China", latitude: 22.3193, longitude: 114.1694 },
    City { name: "Hangzhou", country: "China", latitude: 30.2741, longitude: 120.1551 },
    City { name: "Chengdu", country: "China", latitude: 30.5728, longitude: 104.0668 },
    City { name: "Xi'an", country: "China", latitude: 34.3416, longitude: 108.9398 },
    City { name: "Nanjing", country: "China", latitude: 32.0603, longitude: 118.7969 },
    City { name: "Wuhan", country: "China", latitude: 30.5928, longitude: 114.3055 },
    City { name: "Chongqing", country: "China", latitude: 29.4316, longitude: 106.9123 },
    City { name: "New York", country: "United States", latitude: 40.7128, longitude: -74.0060 },
    City { name: "London", country: "United Kingdom", latitude: 51.5074, longitude: -0.1278 },
    City { name: "Paris", country: "France", latitude: 48.8566, longitude: 2.3522 },
    City { name: "Tokyo", country: "Japan", latitude: 35.6762, longitude: 139.6503 },
    City { name: "Sydney", country: "Australia", latitude: -33.8688, longitude: 151.2093 },
    City { name: "Toronto", country: "Canada", latitude: 43.6532, longitude: -79.3832 },
    City { name: "Berlin", country: "Germany", latitude: 52.5200, longitude: 13.4050 },
    City { name: "Rome", country: "Italy", latitude: 41.9028, longitude: 12.4964 },
    City { name: "Madrid", country: "Spain", latitude: 40.4168, longitude: -3.7038 },
    City { name: "Amsterdam", country: "Netherlands", latitude: 52.3676, longitude: 4.9041 },
];

/// A city addressable by AccuWeather location key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuCity {
    pub name: &'static str,
    pub country: &'static str,
    pub location_key: &'static str,
}

/// Cities served by the AccuWeather endpoint.
pub const ACCU_CITIES: &[AccuCity] = &[
    AccuCity { name: "Beijing", country: "China", location_key: "101924" },
    AccuCity { name: "New York", country: "United States", location_key: "349727" },
    AccuCity { name: "London", country: "United Kingdom", location_key: "328328" },
    AccuCity { name: "Paris", country: "France", location_key: "623" },
    AccuCity { name: "Tokyo", country: "Japan", location_key: "226396" },
    AccuCity { name: "Sydney", country: "Australia", location_key: "22889" },
    AccuCity { name: "Toronto", country: "Canada", location_key: "55488" },
    AccuCity { name: "Berlin", country: "Germany", location_key: "178087" },
    AccuCity { name: "Rome", country: "Italy", location_key: "213490" },
    AccuCity { name: "Madrid", country: "Spain", location_key: "308526" },
    AccuCity { name: "Amsterdam", country: "Netherlands", location_key: "249758" },
];

// == Random Selection ==
/// Picks a random city from the Open-Meteo list.
pub fn random_city() -> &'static City {
    CITIES
        .choose(&mut rand::thread_rng())
        .expect("city list is not empty")
}

/// Picks a random city from the AccuWeather list.
pub fn random_accu_city() -> &'static AccuCity {
    ACCU_CITIES
        .choose(&mut rand::thread_rng())
        .expect("city list is not empty")
}
