//! Walks the inventory service through a short session against the mock
//! catalog and prints the resulting dashboard state as JSON.

mod config;

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

use stockroom_core::ProductId;
use stockroom_inventory::{
    Alert, InventoryMetrics, InventoryService, StockAdjustment, StockMovement, TracingNotifier,
};
use stockroom_products::InMemoryProductRegistry;
use stockroom_products::seed::mock_catalog;

use crate::config::AppConfig;

#[derive(Serialize)]
struct DashboardSnapshot<'a> {
    low_stock_threshold: u64,
    metrics: InventoryMetrics,
    alerts: &'a [Alert],
    movements: Vec<StockMovement>,
}

/// Stand-in for the catalog API: the data shows up after `latency`.
async fn load_catalog(latency: Duration) -> anyhow::Result<InMemoryProductRegistry> {
    tokio::time::sleep(latency).await;
    let products = mock_catalog().context("mock catalog is invalid")?;
    InMemoryProductRegistry::with_products(products).context("mock catalog has duplicate ids")
}

fn id(raw: &str) -> anyhow::Result<ProductId> {
    ProductId::new(raw).with_context(|| format!("bad product id {raw:?}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    stockroom_observability::tracing::init(config.log_format);

    tracing::info!(latency_ms = config.simulated_latency.as_millis() as u64, "loading catalog");
    let registry = load_catalog(config.simulated_latency).await?;
    let mut service = InventoryService::new(registry, config.inventory, TracingNotifier);
    tracing::info!(products = service.products().len(), "catalog loaded");

    service.adjust_stock(StockAdjustment::new(id("prod-3")?, -12, "Product sold"))?;
    service.adjust_stock(
        StockAdjustment::new(id("prod-2")?, -80, "Damaged/defective items")
            .with_notes("pallet dropped during unloading"),
    )?;

    if let Err(e) = service.bulk_adjust_stock(vec![
        StockAdjustment::new(id("prod-1")?, 10, "Received new shipment"),
        StockAdjustment::new(id("prod-404")?, 5, "Supplier credit"),
        StockAdjustment::new(id("prod-3")?, 5, "Received new shipment"),
    ]) {
        tracing::warn!(failed_at = e.index, applied = e.applied.len(), error = %e.source, "bulk adjustment stopped early");
    }

    service.set_stock_level(&id("prod-1")?, 40, Some("Manual count adjustment"))?;

    let snapshot = DashboardSnapshot {
        low_stock_threshold: service.low_stock_threshold(),
        metrics: service.metrics(),
        alerts: service.alerts(),
        movements: service.movements().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
