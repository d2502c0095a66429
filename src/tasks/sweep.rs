//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest period the sweep will tick at. A zero TTL sweeps at this rate.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Longest period the sweep will tick at. Larger TTLs still expire entries
/// by age; they are only checked at this rate.
pub const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Spawns a task that sweeps `store` once every `period`.
///
/// The period is clamped to `[MIN_SWEEP_INTERVAL, MAX_SWEEP_INTERVAL]`.
/// The first sweep happens one full period after spawning. The task holds
/// the store lock for the whole scan. It stops when `shutdown` observes
/// `true` or when its sender is dropped.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let (stop_tx, stop_rx) = watch::channel(false);
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(5), stop_rx);
/// stop_tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = period.clamp(MIN_SWEEP_INTERVAL, MAX_SWEEP_INTERVAL);

    tokio::spawn(async move {
        debug!(?period, "Cache sweep task started");

        let now = Instant::now();
        let start = now.checked_add(period).unwrap_or(now);
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = store.lock().await;
                        let removed = guard.cleanup_expired();
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "Cache sweep removed expired entries");
                    } else {
                        debug!(remaining, "Cache sweep found no expired entries");
                    }
                }
                changed = shutdown.changed() => {
                    // A dropped sender means the owning cache is gone.
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Cache sweep task stopped");
    })
}
