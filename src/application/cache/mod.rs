//! Runtime caches used by application services.
//!
//! - [`memory::MemoryCache`]: In-memory [`TtlStore`](crate::port::TtlStore)
//!   with lazy expiration

pub mod memory;
