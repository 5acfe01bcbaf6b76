//! Catalog cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache lifetime settings.
///
/// `ttl_secs` is both how long a cached catalog stays valid and how often
/// the background refresher runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

/// Longest accepted TTL: one year.
pub const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

const fn default_ttl_secs() -> u64 {
    300
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}
