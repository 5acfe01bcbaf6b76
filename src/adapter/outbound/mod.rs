//! Outbound adapters (driven side).

pub mod skinport;
