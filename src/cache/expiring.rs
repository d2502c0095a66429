//! Expiring Cache Handle
//!
//! Thread-safe front end over [`CacheStore`] that owns its sweep task.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheStore, ExpirationPolicy};
use crate::tasks::spawn_sweep_task;

// == Cache ==
/// In-memory response cache whose entries expire after a fixed TTL.
///
/// A single lock guards the entry map. A background task sweeps expired
/// entries once per TTL period, for as long as the cache is open.
///
/// Under [`ExpirationPolicy::SweepOnly`] a lookup is a pure presence check:
/// an entry inserted at `T` stays visible until the first sweep at or after
/// `T + ttl`, so it may be served for up to just under `2 * ttl`.
///
/// The sweep ends when [`Cache::close`] is called or when the cache is
/// dropped. Lookups and inserts keep working after close, but nothing is
/// swept any more.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    policy: ExpirationPolicy,
    shutdown: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// A zero TTL expires every entry on the next sweep.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_policy(ttl, ExpirationPolicy::default())
    }

    /// Creates an empty cache with an explicit expiration policy.
    pub fn with_policy(ttl: Duration, policy: ExpirationPolicy) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = spawn_sweep_task(store.clone(), ttl, shutdown_rx);

        info!(?ttl, ?policy, "Response cache created");

        Self {
            store,
            ttl,
            policy,
            shutdown,
            sweeper: Mutex::new(Some(handle)),
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the expiration policy.
    pub fn policy(&self) -> ExpirationPolicy {
        self.policy
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        debug!(%key, bytes = value.len(), "Caching response");
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Looks up `key`.
    ///
    /// Returns `None` if nothing is stored, or, under
    /// [`ExpirationPolicy::SweepAndRead`], if the entry is older than the TTL.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.lock().await;
        if self.policy.checks_on_read() {
            store.get_fresh(key)
        } else {
            store.get(key)
        }
    }

    /// Returns the number of stored entries, including ones awaiting a sweep.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Returns true once [`Cache::close`] has been called.
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    // == Close ==
    /// Stops the sweep task and waits for it to finish.
    ///
    /// Calling this more than once is harmless.
    pub async fn close(&self) {
        self.shutdown.send_replace(true);

        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "Cache sweep task ended abnormally");
            }
            info!("Response cache closed");
        }
    }
}
