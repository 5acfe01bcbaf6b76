//! Thread-safe in-memory TTL store with lazy expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::port::TtlStore;

/// Stand-in deadline for TTLs the clock cannot represent.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `now + ttl`, saturating at [`FAR_FUTURE`] instead of overflowing.
pub(crate) fn deadline_after(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl).unwrap_or_else(|| now + FAR_FUTURE)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Arc<[u8]>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// In-memory [`TtlStore`].
///
/// Expired entries are not swept in the background; a read that finds one
/// removes it. Reads share a read lock and only escalate to the write lock
/// to purge.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until they are read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn purge_if_expired(&self, key: &str) {
        let mut entries = self.entries.write();
        // A writer may have replaced the entry between the two locks.
        if entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(Instant::now()))
        {
            entries.remove(key);
        }
    }
}

impl TtlStore for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        let entry = self.entries.read().get(key).cloned()?;

        if entry.is_expired(Instant::now()) {
            self.purge_if_expired(key);
            return None;
        }

        Some(entry.value)
    }

    fn set(&self, key: &str, value: Arc<[u8]>, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: deadline_after(Instant::now(), ttl),
        };
        self.entries.write().insert(key.to_owned(), entry);
    }
}
