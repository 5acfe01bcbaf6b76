//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod price_source;
pub mod store;
