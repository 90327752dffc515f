//! Cache Module
//!
//! Provides the stale-tolerant TTL cache shared by the weather providers:
//! fresh hits within a TTL window, stale fallback when upstream fails, and
//! age-based eviction on sweep. No capacity eviction; the map is unbounded.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::{Lookup, StaleCache};
