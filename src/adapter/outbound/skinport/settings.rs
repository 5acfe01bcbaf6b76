//! Skinport API configuration.

use serde::{Deserialize, Serialize};

/// Skinport HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinportHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3_000
}

impl Default for SkinportHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Skinport items API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinportConfig {
    /// API base URL, without the `/items` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Steam application whose items are listed (730 = CS2).
    #[serde(default = "default_app_id")]
    pub app_id: u32,
    /// Currency code prices are reported in.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub http: SkinportHttpConfig,
}

fn default_api_url() -> String {
    "https://api.skinport.com/v1".into()
}

const fn default_app_id() -> u32 {
    730
}

fn default_currency() -> String {
    "EUR".into()
}

impl Default for SkinportConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            app_id: default_app_id(),
            currency: default_currency(),
            http: SkinportHttpConfig::default(),
        }
    }
}
