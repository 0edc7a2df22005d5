//! Stock status relative to the low-stock threshold.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockroom_products::Product;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// `0` is out of stock, `1..=threshold` is low, anything above is in stock.
    pub fn classify(inventory: u64, threshold: u64) -> Self {
        if inventory == 0 {
            StockStatus::OutOfStock
        } else if inventory <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn of(product: &Product, threshold: u64) -> Self {
        Self::classify(product.inventory(), threshold)
    }
}

fn with_status(products: &[Arc<Product>], threshold: u64, status: StockStatus) -> Vec<Arc<Product>> {
    products
        .iter()
        .filter(|p| StockStatus::of(p, threshold) == status)
        .cloned()
        .collect()
}

/// Products with `0 < inventory <= threshold`, in list order.
pub fn low_stock_products(products: &[Arc<Product>], threshold: u64) -> Vec<Arc<Product>> {
    with_status(products, threshold, StockStatus::LowStock)
}

/// Products with no stock, in list order.
pub fn out_of_stock_products(products: &[Arc<Product>], threshold: u64) -> Vec<Arc<Product>> {
    with_status(products, threshold, StockStatus::OutOfStock)
}
