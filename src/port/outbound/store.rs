//! Port for a key/value store with per-entry time-to-live.

use std::sync::Arc;
use std::time::Duration;

/// Store of opaque payloads that expire after a TTL.
///
/// The store knows nothing about what it holds. Implementations must be
/// safe to share between a background writer and concurrent readers.
pub trait TtlStore: Send + Sync {
    /// Return the payload for `key` unless it is absent or expired.
    fn get(&self, key: &str) -> Option<Arc<[u8]>>;

    /// Install `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: Arc<[u8]>, ttl: Duration);
}
