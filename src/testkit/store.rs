//! Recording [`TtlStore`] for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::port::TtlStore;

/// A store that never expires entries and remembers how it was written.
#[derive(Default)]
pub struct MapStore {
    entries: Mutex<HashMap<String, Arc<[u8]>>>,
    last_ttl: Mutex<Option<Duration>>,
    sets: AtomicU32,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload without counting it as a write.
    pub fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.entries.lock().insert(key.to_owned(), Arc::from(value));
    }

    /// Number of [`TtlStore::set`] calls.
    pub fn set_count(&self) -> u32 {
        self.sets.load(Ordering::SeqCst)
    }

    /// TTL passed to the most recent [`TtlStore::set`].
    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock()
    }
}

impl TtlStore for MapStore {
    fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Arc<[u8]>, ttl: Duration) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        *self.last_ttl.lock() = Some(ttl);
        self.entries.lock().insert(key.to_owned(), value);
    }
}
