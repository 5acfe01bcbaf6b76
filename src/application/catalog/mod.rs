//! Price catalog use cases.
//!
//! ```text
//! RefreshScheduler ──tick──┐
//!                          ▼
//!                    CatalogSync ──> DualFetcher ──> merge ──> TtlStore
//!                          ▲
//! ItemsService ───miss─────┘        (hit: decode straight from TtlStore)
//! ```

pub mod fetcher;
pub mod refresh;
pub mod service;
pub mod sync;

pub use fetcher::DualFetcher;
pub use refresh::{RefreshHandle, RefreshScheduler, RefreshState};
pub use service::ItemsService;
pub use sync::{CatalogSync, CATALOG_KEY};
