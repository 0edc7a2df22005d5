//! Inventory summary figures for the dashboard cards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockroom_core::Money;
use stockroom_products::Product;

use crate::status::StockStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryMetrics {
    pub total_products: usize,
    /// Sum of `price * inventory` over all products. Caps at [`Money::MAX`]
    /// (with a warning logged) if the true total does not fit.
    pub total_stock_value: Money,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    /// Mean units on hand; `0.0` for an empty catalog.
    pub average_stock_level: f64,
}

pub fn compute_metrics(products: &[Arc<Product>], threshold: u64) -> InventoryMetrics {
    let mut total_units: u128 = 0;
    let mut low_stock_items = 0;
    let mut out_of_stock_items = 0;

    for product in products {
        total_units += u128::from(product.inventory());
        match StockStatus::of(product, threshold) {
            StockStatus::LowStock => low_stock_items += 1,
            StockStatus::OutOfStock => out_of_stock_items += 1,
            StockStatus::InStock => {}
        }
    }

    let total_stock_value = stock_value(products).unwrap_or_else(|| {
        tracing::warn!(
            products = products.len(),
            "total stock value overflows; reporting the maximum"
        );
        Money::MAX
    });

    let average_stock_level = if products.is_empty() {
        0.0
    } else {
        total_units as f64 / products.len() as f64
    };

    InventoryMetrics {
        total_products: products.len(),
        total_stock_value,
        low_stock_items,
        out_of_stock_items,
        average_stock_level,
    }
}

fn stock_value(products: &[Arc<Product>]) -> Option<Money> {
    products.iter().try_fold(Money::ZERO, |total, p| {
        p.price()
            .checked_times(p.inventory())
            .and_then(|value| total.checked_add(value))
    })
}
