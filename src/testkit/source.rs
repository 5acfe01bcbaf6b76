//! Scripted [`PriceSource`] for testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::item::{Partition, PartitionItem};
use crate::error::{Error, Result};
use crate::port::PriceSource;

/// A price source with fixed rows per partition and switchable failures.
///
/// Every call is counted, including failed ones. An optional delay is
/// applied before each response so timing-based tests can observe
/// concurrency and cancellation.
#[derive(Default)]
pub struct FakeSource {
    rows: Mutex<HashMap<Partition, Vec<PartitionItem>>>,
    failing: Mutex<HashSet<Partition>>,
    delay: Duration,
    tradable_calls: AtomicU32,
    non_tradable_calls: AtomicU32,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, partition: Partition, rows: Vec<PartitionItem>) -> Self {
        self.rows.lock().insert(partition, rows);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the rows served for a partition.
    pub fn set_rows(&self, partition: Partition, rows: Vec<PartitionItem>) {
        self.rows.lock().insert(partition, rows);
    }

    /// Make every following call for `partition` fail.
    pub fn fail(&self, partition: Partition) {
        self.failing.lock().insert(partition);
    }

    /// Undo [`Self::fail`].
    pub fn recover(&self, partition: Partition) {
        self.failing.lock().remove(&partition);
    }

    pub fn calls(&self, partition: Partition) -> u32 {
        self.counter(partition).load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> u32 {
        Partition::ALL.iter().map(|p| self.calls(*p)).sum()
    }

    fn counter(&self, partition: Partition) -> &AtomicU32 {
        match partition {
            Partition::Tradable => &self.tradable_calls,
            Partition::NonTradable => &self.non_tradable_calls,
        }
    }
}

#[async_trait]
impl PriceSource for FakeSource {
    async fn fetch(&self, partition: Partition) -> Result<Vec<PartitionItem>> {
        self.counter(partition).fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.failing.lock().contains(&partition) {
            return Err(Error::UnexpectedStatus {
                status: 503,
                url: format!("fake://items?partition={partition}"),
            });
        }

        Ok(self
            .rows
            .lock()
            .get(&partition)
            .cloned()
            .unwrap_or_default())
    }

    fn source_name(&self) -> &'static str {
        "fake"
    }
}
