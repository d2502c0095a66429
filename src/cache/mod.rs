//! Cache Module
//!
//! In-memory response caching with TTL expiration driven by a background sweep.

mod entry;
mod expiring;
mod policy;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use policy::ExpirationPolicy;
pub use store::CacheStore;
