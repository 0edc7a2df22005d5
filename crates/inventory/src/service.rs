//! Inventory service: the in-process API the storefront screens call.
//!
//! Wraps the stock engine and keeps the derived state (alerts) in step with
//! every change. All operations run to completion synchronously.

use std::sync::Arc;

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_products::{NewProduct, Product, ProductPatch, ProductStore};

use crate::alerts::{Alert, AlertBoard, AlertId};
use crate::config::InventoryConfig;
use crate::engine::{BulkAdjustError, StockAdjustment, StockEngine};
use crate::metrics::{InventoryMetrics, compute_metrics};
use crate::movement::{MovementLog, StockMovement};
use crate::notify::{Notice, Notifier};
use crate::query::ProductQuery;
use crate::status::{low_stock_products, out_of_stock_products};

#[derive(Debug)]
pub struct InventoryService<S, N> {
    engine: StockEngine<S>,
    threshold: u64,
    alerts: AlertBoard,
    notifier: N,
}

impl<S: ProductStore, N: Notifier> InventoryService<S, N> {
    pub fn new(store: S, config: InventoryConfig, notifier: N) -> Self {
        Self::with_engine(StockEngine::new(store), config, notifier)
    }

    pub fn with_engine(engine: StockEngine<S>, config: InventoryConfig, notifier: N) -> Self {
        let mut service = Self {
            engine,
            threshold: config.low_stock_threshold,
            alerts: AlertBoard::new(),
            notifier,
        };
        service.refresh_alerts();
        service
    }

    fn refresh_alerts(&mut self) {
        let products = self.engine.store().list();
        self.alerts.regenerate(&products, self.threshold, Utc::now());
    }

    fn notify(&mut self, notice: Notice) {
        self.notifier.notify(notice);
    }

    // ---- products ------------------------------------------------------

    pub fn products(&self) -> Vec<Arc<Product>> {
        self.engine.store().list()
    }

    pub fn product(&self, id: &ProductId) -> Option<Arc<Product>> {
        self.engine.store().get(id)
    }

    pub fn create_product(&mut self, data: NewProduct) -> DomainResult<Arc<Product>> {
        match self.engine.store_mut().create(data) {
            Ok(product) => {
                tracing::info!(product_id = %product.id_typed(), name = product.name(), "product created");
                self.refresh_alerts();
                self.notify(Notice::success("Product created successfully!"));
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "product creation failed");
                self.notify(Notice::error("Failed to save product"));
                Err(e)
            }
        }
    }

    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> DomainResult<Arc<Product>> {
        match self.engine.store_mut().update(id, patch) {
            Ok(product) => {
                tracing::info!(product_id = %id, "product updated");
                self.refresh_alerts();
                self.notify(Notice::success("Product updated successfully!"));
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "product update failed");
                self.notify(Notice::error("Failed to save product"));
                Err(e)
            }
        }
    }

    /// Remove a product. Deleting an unknown id changes nothing, reports an
    /// error notice and returns `false`.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        if self.engine.store_mut().delete(id) {
            tracing::info!(product_id = %id, "product deleted");
            self.refresh_alerts();
            self.notify(Notice::success("Product deleted successfully"));
            true
        } else {
            tracing::warn!(product_id = %id, "delete of unknown product ignored");
            self.notify(Notice::error("Failed to delete product"));
            false
        }
    }

    // ---- stock ---------------------------------------------------------

    pub fn adjust_stock(&mut self, adjustment: StockAdjustment) -> DomainResult<StockMovement> {
        let increase = adjustment.delta > 0;
        match self.engine.apply(adjustment) {
            Ok(movement) => {
                self.refresh_alerts();
                self.notify(Notice::success(if increase {
                    "Stock increased successfully"
                } else {
                    "Stock decreased successfully"
                }));
                Ok(movement)
            }
            Err(e) => {
                self.notify(Notice::error("Failed to adjust stock"));
                Err(e)
            }
        }
    }

    /// Apply adjustments in order, stopping at the first failure.
    ///
    /// Not transactional: entries applied before the failure stay applied and
    /// are listed in the error. One notice covers the whole batch.
    pub fn bulk_adjust_stock(
        &mut self,
        adjustments: Vec<StockAdjustment>,
    ) -> Result<Vec<StockMovement>, BulkAdjustError> {
        let count = adjustments.len();
        let result = self.engine.bulk_adjust_stock(adjustments);

        let changed = match &result {
            Ok(applied) => !applied.is_empty(),
            Err(e) => !e.applied.is_empty(),
        };
        if changed {
            self.refresh_alerts();
        }

        match &result {
            Ok(_) => self.notify(Notice::success(format!(
                "Bulk stock adjustment completed for {count} products"
            ))),
            Err(_) => self.notify(Notice::error("Failed to complete bulk stock adjustment")),
        }
        result
    }

    pub fn set_stock_level(
        &mut self,
        product_id: &ProductId,
        target: u64,
        reason: Option<&str>,
    ) -> DomainResult<StockMovement> {
        let Some(current) = self.product(product_id).map(|p| p.inventory()) else {
            self.notify(Notice::error("Failed to adjust stock"));
            return Err(DomainError::not_found(format!("product {product_id}")));
        };

        match self.engine.set_stock_level(product_id, target, reason) {
            Ok(movement) => {
                self.refresh_alerts();
                self.notify(Notice::success(if target > current {
                    "Stock increased successfully"
                } else {
                    "Stock decreased successfully"
                }));
                Ok(movement)
            }
            Err(e) => {
                self.notify(Notice::error("Failed to adjust stock"));
                Err(e)
            }
        }
    }

    pub fn movements(&self) -> &MovementLog {
        self.engine.movements()
    }

    /// One product's movement history, most recent first.
    pub fn product_movements(&self, product_id: &ProductId) -> Vec<StockMovement> {
        self.engine.movements().for_product(product_id).cloned().collect()
    }

    // ---- derived views -------------------------------------------------

    pub fn low_stock_threshold(&self) -> u64 {
        self.threshold
    }

    /// Change the threshold and re-derive alerts. A settings change, so no
    /// notice is emitted.
    pub fn set_low_stock_threshold(&mut self, threshold: u64) {
        tracing::info!(from = self.threshold, to = threshold, "low-stock threshold changed");
        self.threshold = threshold;
        self.refresh_alerts();
    }

    pub fn alerts(&self) -> &[Alert] {
        self.alerts.alerts()
    }

    pub fn dismiss_alert(&mut self, id: &AlertId) -> bool {
        self.alerts.dismiss(id)
    }

    pub fn metrics(&self) -> InventoryMetrics {
        let metrics = compute_metrics(&self.products(), self.threshold);
        tracing::debug!(
            total_products = metrics.total_products,
            low_stock = metrics.low_stock_items,
            out_of_stock = metrics.out_of_stock_items,
            "metrics computed"
        );
        metrics
    }

    pub fn low_stock_products(&self) -> Vec<Arc<Product>> {
        low_stock_products(&self.products(), self.threshold)
    }

    pub fn out_of_stock_products(&self) -> Vec<Arc<Product>> {
        out_of_stock_products(&self.products(), self.threshold)
    }

    pub fn query(&self, query: &ProductQuery) -> Vec<Arc<Product>> {
        query.apply(&self.products(), self.threshold)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
