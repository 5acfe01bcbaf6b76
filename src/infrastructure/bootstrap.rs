//! Composition root for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::skinport::SkinportClient;
use crate::application::cache::memory::MemoryCache;
use crate::application::catalog::{CatalogSync, DualFetcher, ItemsService, RefreshScheduler};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{PriceSource, TtlStore};

/// The wired catalog: a read-through service and the scheduler that keeps
/// its cache warm. Both share one store and one upstream source.
pub struct Catalog {
    pub service: ItemsService,
    pub scheduler: RefreshScheduler,
}

impl Catalog {
    /// Wire the catalog around an arbitrary source and store.
    pub fn new(
        source: Arc<dyn PriceSource>,
        store: Arc<dyn TtlStore>,
        ttl: std::time::Duration,
    ) -> Self {
        let sync = CatalogSync::new(DualFetcher::new(source), store, ttl);
        Self {
            service: ItemsService::new(sync.clone()),
            scheduler: RefreshScheduler::new(sync),
        }
    }
}

/// Build the production catalog: Skinport client plus in-memory cache.
///
/// # Errors
///
/// Returns an error if the Skinport client cannot be built from `config`.
pub fn build_catalog(config: &Config) -> Result<Catalog> {
    let client = SkinportClient::from_config(&config.skinport)?;
    let source: Arc<dyn PriceSource> = Arc::new(client);
    let store: Arc<dyn TtlStore> = Arc::new(MemoryCache::new());
    let ttl = config.cache.ttl();

    info!(
        source = source.source_name(),
        api_url = %config.skinport.api_url,
        currency = %config.skinport.currency,
        ttl_secs = ttl.as_secs(),
        "Catalog wired"
    );

    Ok(Catalog::new(source, store, ttl))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::CATALOG_KEY;
    use crate::domain::item::{Partition, PartitionItem};
    use crate::testkit::source::FakeSource;
    use crate::testkit::store::MapStore;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    #[test]
    fn build_catalog_from_default_config() {
        assert!(build_catalog(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn service_and_scheduler_share_one_store() {
        let source = Arc::new(FakeSource::new().with_rows(
            Partition::Tradable,
            vec![PartitionItem::new("AK-47", Some(dec!(10.5)))],
        ));
        let store = Arc::new(MapStore::new());
        let catalog = Catalog::new(source.clone(), store.clone(), Duration::from_secs(60));

        let handle = catalog.scheduler.start().await;
        assert!(store.get(CATALOG_KEY).is_some());

        let items = catalog.service.get_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(source.total_calls(), 2);

        handle.shutdown().await;
    }
}
