// In-memory store for raw API response bodies.
// Handles keyed byte payloads, TTL expiration, and the background reaper task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// A cached response body plus its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<u8>,
    created_at: Instant,
}

type EntryMap = Arc<RwLock<HashMap<String, CacheEntry>>>;

/// Expiring store of raw response bodies keyed by request URL.
///
/// Reads never check entry age; a background reaper evicts entries older than
/// the ttl once per ttl interval. A hit can therefore be up to one reap
/// interval past its ttl, so entries live at most just under `2 * ttl`.
///
/// The reaper task is owned by the cache and aborted on drop, so short-lived
/// caches (e.g. in tests) do not leak tasks.
#[derive(Debug)]
pub struct ResponseCache {
    entries: EntryMap,
    reaper: JoinHandle<()>,
}

impl ResponseCache {
    /// Create an empty cache and start its reaper ticking at period `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let entries: EntryMap = Arc::new(RwLock::new(HashMap::new()));
        let reaper = spawn_reaper(Arc::clone(&entries), ttl);
        Self { entries, reaper }
    }

    /// Insert or overwrite the entry for `key`, timestamped now.
    pub async fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        let entry = CacheEntry {
            payload,
            created_at: Instant::now(),
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Copy of the payload for `key`, or `None` on a miss.
    /// Present entries are returned regardless of age.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.payload.clone())
    }

    /// Whether an entry exists for `key`.
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}

/// Spawn the background task that evicts entries older than `ttl` on every
/// `ttl` tick. Entries aged exactly `ttl` survive until the next tick.
fn spawn_reaper(entries: EntryMap, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(ttl);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it so the first real
        // sweep happens one full ttl after startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = {
                let mut map = entries.write().await;
                let before = map.len();
                map.retain(|_, entry| entry.created_at.elapsed() <= ttl);
                before - map.len()
            };
            if removed > 0 {
                debug!(removed, "reaped expired cache entries");
            }
        }
    })
}
