//! Stock adjustment engine.
//!
//! Computes new stock levels from signed deltas, clamps at zero, writes the
//! result back through the product registry and records one movement per
//! adjustment.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::{DomainError, DomainResult, MovementId, ProductId};
use stockroom_products::{ProductPatch, ProductStore};

use crate::movement::{MovementKind, MovementLog, StockMovement};

/// Reason recorded when an adjustment arrives without one.
pub const DEFAULT_ADJUSTMENT_REASON: &str = "Manual adjustment";

/// Reason recorded by [`StockEngine::set_stock_level`] when none is given.
pub const DEFAULT_SET_LEVEL_REASON: &str = "Stock level update";

/// Acting user recorded on movements when none is configured.
pub const DEFAULT_USER: &str = "Admin";

/// A requested stock change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: ProductId,
    /// Signed requested change. Zero is accepted and records a no-op movement.
    pub delta: i64,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StockAdjustment {
    pub fn new(product_id: ProductId, delta: i64, reason: impl Into<String>) -> Self {
        Self {
            product_id,
            delta,
            reason: reason.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Stock level after applying `delta` to `current`, floored at zero.
pub fn clamped_stock(current: u64, delta: i64) -> u64 {
    if delta >= 0 {
        current.saturating_add(delta.unsigned_abs())
    } else {
        current.saturating_sub(delta.unsigned_abs())
    }
}

/// Delta that moves `current` to `target`. Fails if the jump does not fit in
/// an `i64` adjustment.
fn delta_to(current: u64, target: u64) -> DomainResult<i64> {
    let diff = i128::from(target) - i128::from(current);
    i64::try_from(diff).map_err(|_| {
        DomainError::validation(format!(
            "cannot move stock from {current} to {target} in one adjustment"
        ))
    })
}

/// Bulk adjustment stopped part-way.
///
/// Bulk adjustment is not transactional: entries before `index` were applied
/// and stay applied (their movements are in `applied`); entries after it were
/// never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bulk adjustment failed at entry {index} after {} applied: {source}", .applied.len())]
pub struct BulkAdjustError {
    pub index: usize,
    pub applied: Vec<StockMovement>,
    #[source]
    pub source: DomainError,
}

/// Stock engine over a product store.
///
/// Owns the movement log. Products are only ever changed through the
/// store's `update`.
#[derive(Debug)]
pub struct StockEngine<S> {
    store: S,
    log: MovementLog,
    user: String,
}

impl<S: ProductStore> StockEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            log: MovementLog::new(),
            user: DEFAULT_USER.to_string(),
        }
    }

    /// Label recorded as the acting user on new movements.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn movements(&self) -> &MovementLog {
        &self.log
    }

    /// Apply `delta` to a product's stock.
    ///
    /// Fails with `NotFound` (and changes nothing) if the product is absent.
    pub fn adjust_stock(
        &mut self,
        product_id: &ProductId,
        delta: i64,
        reason: &str,
    ) -> DomainResult<StockMovement> {
        self.apply(StockAdjustment::new(product_id.clone(), delta, reason))
    }

    /// [`adjust_stock`](Self::adjust_stock) for a full request (with notes).
    pub fn apply(&mut self, adjustment: StockAdjustment) -> DomainResult<StockMovement> {
        let StockAdjustment {
            product_id,
            delta,
            reason,
            notes,
        } = adjustment;

        let Some(product) = self.store.get(&product_id) else {
            tracing::warn!(product_id = %product_id, delta, "stock adjustment for unknown product");
            return Err(DomainError::not_found(format!("product {product_id}")));
        };

        let previous_stock = product.inventory();
        let new_stock = clamped_stock(previous_stock, delta);
        let quantity = new_stock.abs_diff(previous_stock);
        let kind = if new_stock > previous_stock {
            MovementKind::StockIn
        } else {
            MovementKind::StockOut
        };

        if quantity < delta.unsigned_abs() {
            tracing::warn!(
                product_id = %product_id,
                delta,
                previous_stock,
                new_stock,
                "stock adjustment clamped at zero"
            );
        }

        self.store
            .update(&product_id, ProductPatch::inventory(new_stock))?;

        let reason = if reason.trim().is_empty() {
            DEFAULT_ADJUSTMENT_REASON.to_string()
        } else {
            reason
        };

        let movement = StockMovement {
            id: MovementId::new(),
            product_id,
            product_name: product.name().to_string(),
            kind,
            quantity,
            previous_stock,
            new_stock,
            reason,
            notes: notes.filter(|n| !n.trim().is_empty()),
            user: self.user.clone(),
            timestamp: Utc::now(),
        };

        tracing::info!(
            product_id = %movement.product_id,
            movement_id = %movement.id,
            kind = %movement.kind,
            quantity,
            previous_stock,
            new_stock,
            "stock adjusted"
        );

        self.log.append(movement.clone());
        Ok(movement)
    }

    /// Apply adjustments in order, stopping at the first failure.
    ///
    /// Not transactional: see [`BulkAdjustError`].
    pub fn bulk_adjust_stock(
        &mut self,
        adjustments: impl IntoIterator<Item = StockAdjustment>,
    ) -> Result<Vec<StockMovement>, BulkAdjustError> {
        let mut applied = Vec::new();
        for (index, adjustment) in adjustments.into_iter().enumerate() {
            match self.apply(adjustment) {
                Ok(movement) => applied.push(movement),
                Err(source) => {
                    tracing::warn!(index, applied = applied.len(), error = %source, "bulk stock adjustment stopped");
                    return Err(BulkAdjustError {
                        index,
                        applied,
                        source,
                    });
                }
            }
        }
        Ok(applied)
    }

    /// Move a product's stock to `target` (recorded as an ordinary adjustment).
    pub fn set_stock_level(
        &mut self,
        product_id: &ProductId,
        target: u64,
        reason: Option<&str>,
    ) -> DomainResult<StockMovement> {
        let current = self
            .store
            .get(product_id)
            .map(|p| p.inventory())
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

        let delta = delta_to(current, target)?;
        self.adjust_stock(product_id, delta, reason.unwrap_or(DEFAULT_SET_LEVEL_REASON))
    }
}
