//! Skinprice - a read-through, background-refreshed price catalog.
//!
//! Prices come from the Skinport items API, which reports tradable and
//! non-tradable listings as two separate partitions. This crate fetches both
//! concurrently, merges them into one item per `market_hash_name` and keeps
//! the result in a TTL cache that a background scheduler refreshes on a
//! fixed interval.
//!
//! # Modules
//!
//! - [`domain`] - Items, the partition merge and pagination
//! - [`port`] - Traits for the price source and the TTL store
//! - [`application`] - In-memory cache and the catalog use cases
//! - [`adapter`] - Skinport HTTP client and the CLI
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use skinprice::infrastructure::bootstrap::build_catalog;
//! use skinprice::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> skinprice::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let catalog = build_catalog(&config)?;
//! let handle = catalog.scheduler.start().await;
//! let items = catalog.service.get_items().await?;
//! println!("{} items", items.len());
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
