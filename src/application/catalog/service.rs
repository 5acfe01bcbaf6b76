//! Read-through access to the merged catalog.

use tracing::{debug, warn};

use super::sync::{CatalogSync, CATALOG_KEY};
use crate::domain::item::Item;
use crate::error::{Error, Result};

/// Serves the catalog from cache, fetching inline on a miss.
///
/// A cached payload that no longer decodes is treated exactly like a miss.
/// When the inline fetch fails the caller gets
/// [`Error::ServiceUnavailable`]; stale or partial data is never returned.
#[derive(Clone)]
pub struct ItemsService {
    sync: CatalogSync,
}

impl ItemsService {
    pub fn new(sync: CatalogSync) -> Self {
        Self { sync }
    }

    /// Return the merged catalog.
    ///
    /// On a cache miss this awaits a full upstream fetch; callers that need
    /// a deadline should wrap the call in [`tokio::time::timeout`].
    pub async fn get_items(&self) -> Result<Vec<Item>> {
        if let Some(items) = self.cached() {
            return Ok(items);
        }

        debug!("Items cache miss, fetching from source");
        self.sync
            .sync()
            .await
            .map_err(|e| Error::ServiceUnavailable(Box::new(e)))
    }

    fn cached(&self) -> Option<Vec<Item>> {
        let payload = self.sync.store().get(CATALOG_KEY)?;
        match serde_json::from_slice(&payload) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(error = %Error::CacheDecode(e), "Ignoring cached items");
                None
            }
        }
    }
}
