//! Domain types for the price catalog.
//!
//! - [`item`] - Partition rows and the merged catalog item
//! - [`merge`] - Pure merge of the tradable and non-tradable partitions
//! - [`page`] - Pagination of an already-merged catalog

pub mod item;
pub mod merge;
pub mod page;

pub use item::{Item, Partition, PartitionItem};
pub use merge::merge;
pub use page::{Page, PageRequest};
