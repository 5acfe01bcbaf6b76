//! Handler for the `run` command.

use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_catalog;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
///
/// Warms the cache, then keeps refreshing it every TTL until Ctrl-C.
pub async fn execute(config: &Config) -> Result<()> {
    let catalog = build_catalog(config)?;

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("API", &config.skinport.api_url);
        output::field("Currency", &config.skinport.currency);
        output::field("Refresh", format!("every {}s", config.cache.ttl_secs));
        println!();
    }

    let handle = catalog.scheduler.start().await;

    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");

    handle.shutdown().await;
    Ok(())
}
