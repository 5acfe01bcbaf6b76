//! Skinport REST API client.
//!
//! Each call fetches one partition of `GET {api_url}/items`. The response is
//! brotli-compressed JSON; `reqwest` advertises `br` and decompresses it
//! transparently. Anything other than `200 OK` is an error, including the
//! `429` Skinport returns once its rate limit is exhausted. Nothing is
//! retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use super::settings::SkinportConfig;
use crate::domain::item::{Partition, PartitionItem};
use crate::error::{Error, Result};
use crate::port::PriceSource;

/// HTTP client for the Skinport items endpoint.
pub struct SkinportClient {
    http: HttpClient,
    items_url: Url,
    app_id: u32,
    currency: String,
}

impl SkinportClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when `api_url` is not a valid base URL.
    pub fn from_config(config: &SkinportConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        let items_url = Url::parse(&format!(
            "{}/items",
            config.api_url.trim_end_matches('/')
        ))?;

        Ok(Self {
            http,
            items_url,
            app_id: config.app_id,
            currency: config.currency.clone(),
        })
    }

    /// Full request URL for one partition.
    #[must_use]
    pub fn partition_url(&self, partition: Partition) -> Url {
        let mut url = self.items_url.clone();
        url.query_pairs_mut()
            .append_pair("app_id", &self.app_id.to_string())
            .append_pair("currency", &self.currency)
            .append_pair("tradable", partition.as_flag());
        url
    }

    /// Fetch every row of one partition.
    pub async fn get_items(&self, partition: Partition) -> Result<Vec<PartitionItem>> {
        let url = self.partition_url(partition);
        info!(url = %url, %partition, "Fetching Skinport items");

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            if status == StatusCode::TOO_MANY_REQUESTS {
                warn!(%partition, "Skinport rate limit reached");
            }
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let items: Vec<PartitionItem> = response.json().await?;
        debug!(count = items.len(), %partition, "Fetched Skinport items");

        Ok(items)
    }
}

#[async_trait]
impl PriceSource for SkinportClient {
    async fn fetch(&self, partition: Partition) -> Result<Vec<PartitionItem>> {
        self.get_items(partition).await
    }

    fn source_name(&self) -> &'static str {
        "Skinport"
    }
}
