//! Cache Entry Module
//!
//! Defines the immutable record stored for each cached response.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload together with the moment it was inserted.
///
/// Entries are never mutated. Overwriting a key replaces its entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw payload, typically an HTTP response body
    value: Bytes,
    /// Insertion timestamp (monotonic clock)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns a cheap handle to the stored bytes.
    pub fn value(&self) -> Bytes {
        self.value.clone()
    }

    /// Returns the insertion timestamp.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// The comparison is strict: an entry whose age equals the TTL exactly
    /// is still live. With a zero TTL every entry older than an instant is
    /// expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
