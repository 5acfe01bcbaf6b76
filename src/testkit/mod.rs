//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - [`FakeSource`](source::FakeSource), a scripted
//!   [`PriceSource`](crate::port::PriceSource) with per-partition call counters.
//! - [`store`] - [`MapStore`](store::MapStore), a non-expiring
//!   [`TtlStore`](crate::port::TtlStore) that records writes.

pub mod source;
pub mod store;
