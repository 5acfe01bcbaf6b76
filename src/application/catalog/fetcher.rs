//! Concurrent fetch of both price partitions.

use std::sync::Arc;

use tracing::debug;

use crate::domain::item::{Item, Partition};
use crate::domain::merge::merge;
use crate::error::{Error, Result};
use crate::port::PriceSource;

/// Fetches the tradable and non-tradable partitions side by side and merges
/// them into one catalog.
///
/// Both calls run inside the caller's future, so dropping it (or wrapping it
/// in a timeout) cancels both. Either failure fails the whole fetch and the
/// other partition's rows are discarded.
#[derive(Clone)]
pub struct DualFetcher {
    source: Arc<dyn PriceSource>,
}

impl DualFetcher {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self { source }
    }

    /// Fetch both partitions and merge them.
    pub async fn fetch_merged(&self) -> Result<Vec<Item>> {
        let (tradable, non_tradable) = tokio::join!(
            self.source.fetch(Partition::Tradable),
            self.source.fetch(Partition::NonTradable),
        );

        let tradable = tradable.map_err(|e| Error::partition(Partition::Tradable, e))?;
        let non_tradable = non_tradable.map_err(|e| Error::partition(Partition::NonTradable, e))?;

        debug!(
            source = self.source.source_name(),
            tradable = tradable.len(),
            non_tradable = non_tradable.len(),
            "Fetched both partitions"
        );

        Ok(merge(tradable, non_tradable))
    }
}
