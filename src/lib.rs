//! Weather Hub - a lightweight weather service
//!
//! Serves current conditions for random cities from two upstream providers
//! through a stale-tolerant TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod tasks;

pub use api::AppState;
pub use cache::{Lookup, StaleCache};
pub use config::Config;
pub use tasks::{spawn_preload, spawn_sweeper, SweeperHandle};
