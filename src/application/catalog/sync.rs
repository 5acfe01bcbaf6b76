//! The single fetch, merge and store cycle behind every cache write.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::fetcher::DualFetcher;
use crate::domain::item::Item;
use crate::error::Result;
use crate::port::TtlStore;

/// Cache key holding the serialized catalog.
pub const CATALOG_KEY: &str = "skinport:items";

/// Fetches the merged catalog and writes it to the store.
///
/// Shared by the background refresher and the read-through fallback so both
/// producers write exactly the same shape under the same key and TTL.
#[derive(Clone)]
pub struct CatalogSync {
    fetcher: DualFetcher,
    store: Arc<dyn TtlStore>,
    ttl: Duration,
}

impl CatalogSync {
    pub fn new(fetcher: DualFetcher, store: Arc<dyn TtlStore>, ttl: Duration) -> Self {
        Self {
            fetcher,
            store,
            ttl,
        }
    }

    /// Lifetime of every catalog entry written by this sync.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    pub(crate) fn store(&self) -> &Arc<dyn TtlStore> {
        &self.store
    }

    /// Fetch, merge and store the catalog, returning the fresh items.
    ///
    /// A fetch failure leaves the store untouched. A serialization failure
    /// is logged and the items are still returned.
    pub async fn sync(&self) -> Result<Vec<Item>> {
        let items = self.fetcher.fetch_merged().await?;

        match serde_json::to_vec(&items) {
            Ok(payload) => {
                self.store.set(CATALOG_KEY, Arc::from(payload), self.ttl);
                info!(count = items.len(), "Items cache refreshed");
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize items, cache not updated");
            }
        }

        Ok(items)
    }
}
