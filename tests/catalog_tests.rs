//! End-to-end catalog behaviour over the in-memory cache and a scripted source.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;
use skinprice::application::cache::memory::MemoryCache;
use skinprice::application::catalog::{RefreshState, CATALOG_KEY};
use skinprice::domain::{Item, Partition, PartitionItem};
use skinprice::error::Error;
use skinprice::infrastructure::bootstrap::Catalog;
use skinprice::port::TtlStore;
use skinprice::testkit::source::FakeSource;

const TTL: Duration = Duration::from_secs(60);

fn row(name: &str, price: rust_decimal::Decimal) -> PartitionItem {
    PartitionItem::new(name, Some(price)).with_currency("EUR")
}

fn ak_awp_source() -> Arc<FakeSource> {
    Arc::new(
        FakeSource::new()
            .with_rows(Partition::Tradable, vec![row("AK-47", dec!(10.5))])
            .with_rows(
                Partition::NonTradable,
                vec![row("AK-47", dec!(8.0)), row("AWP", dec!(5.0))],
            ),
    )
}

fn wire(source: &Arc<FakeSource>) -> (Catalog, Arc<MemoryCache>) {
    let store = Arc::new(MemoryCache::new());
    let catalog = Catalog::new(source.clone(), store.clone(), TTL);
    (catalog, store)
}

fn by_name(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| a.market_hash_name.cmp(&b.market_hash_name));
    items
}

#[tokio::test]
async fn read_through_merges_partitions() {
    let source = ak_awp_source();
    let (catalog, _store) = wire(&source);

    let items = by_name(catalog.service.get_items().await.unwrap());

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].market_hash_name, "AK-47");
    assert_eq!(items[0].min_price_tradable, Some(dec!(10.5)));
    assert_eq!(items[0].min_price_non_tradable, Some(dec!(8.0)));
    assert_eq!(items[1].market_hash_name, "AWP");
    assert_eq!(items[1].min_price_tradable, None);
    assert_eq!(items[1].min_price_non_tradable, Some(dec!(5.0)));
}

#[tokio::test]
async fn second_read_is_served_from_cache() {
    let source = ak_awp_source();
    let (catalog, store) = wire(&source);

    let first = by_name(catalog.service.get_items().await.unwrap());
    assert_eq!(source.calls(Partition::Tradable), 1);
    assert_eq!(source.calls(Partition::NonTradable), 1);
    assert_eq!(store.len(), 1);

    let second = by_name(catalog.service.get_items().await.unwrap());
    assert_eq!(source.total_calls(), 2);
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn expired_entry_triggers_refetch() {
    let source = ak_awp_source();
    let (catalog, store) = wire(&source);

    catalog.service.get_items().await.unwrap();
    tokio::time::advance(TTL + Duration::from_secs(1)).await;
    assert!(store.get(CATALOG_KEY).is_none());

    source.set_rows(Partition::Tradable, vec![row("AK-47", dec!(9.0))]);
    let items = by_name(catalog.service.get_items().await.unwrap());

    assert_eq!(source.total_calls(), 4);
    assert_eq!(items[0].min_price_tradable, Some(dec!(9.0)));
}

#[tokio::test]
async fn corrupt_payload_is_refetched_and_overwritten() {
    let source = ak_awp_source();
    let (catalog, store) = wire(&source);
    store.set(CATALOG_KEY, Arc::from(&b"{not json"[..]), TTL);

    let items = catalog.service.get_items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(source.total_calls(), 2);
    let payload = store.get(CATALOG_KEY).unwrap();
    let decoded: Vec<Item> = serde_json::from_slice(&payload).unwrap();
    assert_eq!(by_name(decoded), by_name(items));
}

#[tokio::test]
async fn failed_partition_keeps_previous_catalog() {
    let source = ak_awp_source();
    let (catalog, _store) = wire(&source);
    let before = by_name(catalog.service.get_items().await.unwrap());

    source.fail(Partition::NonTradable);
    let handle = catalog.scheduler.start().await;
    assert_eq!(handle.state(), RefreshState::Running);

    let after = by_name(catalog.service.get_items().await.unwrap());
    assert_eq!(before, after);
    assert_eq!(source.total_calls(), 4);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn failure_without_cached_catalog_is_unavailable() {
    let source = ak_awp_source();
    source.fail(Partition::Tradable);
    let (catalog, store) = wire(&source);

    let err = catalog.service.get_items().await.unwrap_err();

    assert!(matches!(err, Error::ServiceUnavailable(_)));
    assert_eq!(err.failed_partition(), Some(Partition::Tradable));
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn scheduler_refreshes_catalog_every_ttl() {
    let source = ak_awp_source();
    let (catalog, _store) = wire(&source);

    let handle = catalog.scheduler.start().await;
    assert_eq!(source.total_calls(), 2);

    source.set_rows(Partition::NonTradable, vec![row("AWP", dec!(4.0))]);
    tokio::time::sleep(TTL + Duration::from_secs(1)).await;
    assert_eq!(source.total_calls(), 4);

    let items = by_name(catalog.service.get_items().await.unwrap());
    assert_eq!(source.total_calls(), 4);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].min_price_non_tradable, None);
    assert_eq!(items[1].min_price_non_tradable, Some(dec!(4.0)));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn timed_out_read_leaves_cache_empty() {
    let source = Arc::new(
        FakeSource::new()
            .with_rows(Partition::Tradable, vec![row("AK-47", dec!(10.5))])
            .with_delay(Duration::from_secs(5)),
    );
    let (catalog, store) = wire(&source);

    let result = tokio::time::timeout(Duration::from_secs(1), catalog.service.get_items()).await;

    assert!(result.is_err());
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn concurrent_misses_both_fetch() {
    let source = Arc::new(
        FakeSource::new()
            .with_rows(Partition::Tradable, vec![row("AK-47", dec!(10.5))])
            .with_delay(Duration::from_millis(100)),
    );
    let (catalog, store) = wire(&source);

    let (a, b) = tokio::join!(catalog.service.get_items(), catalog.service.get_items());

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(source.total_calls(), 4);
    assert_eq!(store.len(), 1);
}
