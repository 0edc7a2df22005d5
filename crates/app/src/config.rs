use std::time::Duration;

use anyhow::Context;

use stockroom_inventory::InventoryConfig;
use stockroom_observability::LogFormat;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inventory: InventoryConfig,
    /// Delay before the mock catalog "arrives".
    pub simulated_latency: Duration,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let simulated_latency = match std::env::var("STOCKROOM_SIMULATED_LATENCY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .context("STOCKROOM_SIMULATED_LATENCY_MS must be a whole number of milliseconds")?,
            ),
            Err(_) => Duration::from_millis(1_000),
        };

        let log_format = std::env::var("STOCKROOM_LOG_FORMAT")
            .ok()
            .and_then(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            inventory: InventoryConfig::from_env(),
            simulated_latency,
            log_format,
        })
    }
}
