//! Low-stock and out-of-stock alerts.
//!
//! Alerts are derived, never stored: every call to [`generate_alerts`]
//! rebuilds the full list from the current products and threshold.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_products::Product;

use crate::status::StockStatus;

/// Deterministic alert id: `low-stock-<product>` or `out-of-stock-<product>`.
///
/// Regenerating alerts for unchanged inputs yields the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    pub fn low_stock(product_id: &ProductId) -> Self {
        Self(format!("low-stock-{product_id}"))
    }

    pub fn out_of_stock(product_id: &ProductId) -> Self {
        Self(format!("out-of-stock-{product_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AlertId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Low stock.
    Warning,
    /// Out of stock.
    Danger,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Snapshot of the product the alert is about.
    pub product: Arc<Product>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub priority: AlertPriority,
}

impl Alert {
    fn low_stock(product: &Arc<Product>, at: DateTime<Utc>) -> Self {
        Self {
            id: AlertId::low_stock(product.id_typed()),
            kind: AlertKind::Warning,
            message: format!(
                "Low stock alert: {} has only {} units remaining",
                product.name(),
                product.inventory()
            ),
            product: Arc::clone(product),
            timestamp: at,
            priority: AlertPriority::Medium,
        }
    }

    fn out_of_stock(product: &Arc<Product>, at: DateTime<Utc>) -> Self {
        Self {
            id: AlertId::out_of_stock(product.id_typed()),
            kind: AlertKind::Danger,
            message: format!("Out of stock: {} is completely out of stock", product.name()),
            product: Arc::clone(product),
            timestamp: at,
            priority: AlertPriority::High,
        }
    }
}

/// Build the alert list for `products`.
///
/// Low-stock warnings come first, then out-of-stock dangers; each group keeps
/// product-list order. `at` stamps every alert, so identical inputs give
/// identical output.
pub fn generate_alerts(products: &[Arc<Product>], threshold: u64, at: DateTime<Utc>) -> Vec<Alert> {
    let low = products
        .iter()
        .filter(|p| StockStatus::of(p, threshold) == StockStatus::LowStock)
        .map(|p| Alert::low_stock(p, at));
    let out = products
        .iter()
        .filter(|p| StockStatus::of(p, threshold) == StockStatus::OutOfStock)
        .map(|p| Alert::out_of_stock(p, at));
    low.chain(out).collect()
}

/// The alerts currently showing.
///
/// Dismissal is ephemeral: [`regenerate`](Self::regenerate) rebuilds the list
/// from scratch, so a dismissed alert comes back on the next product or
/// threshold change if the condition still holds.
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regenerate(&mut self, products: &[Arc<Product>], threshold: u64, at: DateTime<Utc>) {
        self.alerts = generate_alerts(products, threshold, at);
        tracing::debug!(alerts = self.alerts.len(), threshold, "alerts regenerated");
    }

    /// Visible alerts, in generation order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Hide an alert until the next regeneration. Returns `false` if no such
    /// alert is showing.
    pub fn dismiss(&mut self, id: &AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| &a.id != id);
        self.alerts.len() != before
    }
}
