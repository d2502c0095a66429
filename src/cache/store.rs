//! Cache Store Module
//!
//! The unsynchronized map behind the cache. Callers wrap it in a single lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age after which an entry is eligible for removal
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Replacing an entry resets its expiration clock.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the stored value if an entry exists, regardless of its age.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(CacheEntry::value)
    }

    /// Returns the stored value only if the entry has not outlived the TTL.
    pub fn get_fresh(&self, key: &str) -> Option<Bytes> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.ttl))
            .map(CacheEntry::value)
    }

    // == Cleanup Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, including ones awaiting a sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
