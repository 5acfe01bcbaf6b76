//! Skinport integration.
//!
//! Skinport's `GET /v1/items` endpoint returns one price partition per call,
//! selected by the `tradable` flag, and is rate limited upstream.

pub mod client;
pub mod settings;

pub use client::SkinportClient;
pub use settings::{SkinportConfig, SkinportHttpConfig};
