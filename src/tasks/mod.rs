//! Background Tasks Module
//!
//! Contains tasks that run outside the request path.
//!
//! # Tasks
//! - Sweeper: removes cache entries past retention at a fixed cadence
//! - Preload: primes the weather cache with one random city at startup

mod preload;
mod sweeper;

pub use preload::spawn_preload;
pub use sweeper::{spawn_sweeper, SweeperHandle};
