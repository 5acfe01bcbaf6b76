//! Port for the external, partitioned price feed.

use async_trait::async_trait;

use crate::domain::item::{Partition, PartitionItem};
use crate::error::Result;

/// Source of per-partition price rows.
///
/// Implementations perform exactly one upstream call per invocation and
/// never retry; the caller decides what a failure means.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch every row of one partition.
    async fn fetch(&self, partition: Partition) -> Result<Vec<PartitionItem>>;

    /// Human-readable source name for logs.
    fn source_name(&self) -> &'static str;
}
