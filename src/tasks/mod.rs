//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - TTL Sweep: removes expired cache entries once per TTL period

mod sweep;

pub use sweep::{spawn_sweep_task, MAX_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL};
