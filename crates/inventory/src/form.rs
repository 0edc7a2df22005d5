//! Validation of raw stock-adjustment form input.
//!
//! Runs before anything reaches the engine; failures come back per field so
//! they can be shown inline.

use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, ValidationErrors};

use crate::engine::{StockAdjustment, clamped_stock};

/// Reasons offered by the adjustment form.
pub static STOCK_ADJUSTMENT_REASONS: &[&str] = &[
    "Manual count adjustment",
    "Received new shipment",
    "Product sold",
    "Product returned",
    "Damaged/defective items",
    "Lost/stolen inventory",
    "Promotional giveaway",
    "Internal use",
    "Quality control rejection",
    "Supplier credit",
    "Other",
];

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentForm {
    pub adjustment: String,
    pub reason: String,
    #[serde(default)]
    pub notes: String,
}

impl AdjustmentForm {
    pub fn new(adjustment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            adjustment: adjustment.into(),
            reason: reason.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate and turn the form into an adjustment request.
    ///
    /// With `current_stock` supplied, reductions below zero are rejected here
    /// instead of being clamped later by the engine.
    pub fn parse(
        &self,
        product_id: ProductId,
        current_stock: Option<u64>,
    ) -> Result<StockAdjustment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let raw = self.adjustment.trim();
        let mut delta = 0;
        if raw.is_empty() {
            errors.add("adjustment", "Stock adjustment is required");
        } else {
            match raw.parse::<i64>() {
                Err(_) => errors.add("adjustment", "Adjustment must be a valid number"),
                Ok(0) => errors.add("adjustment", "Adjustment cannot be zero"),
                Ok(value) => {
                    match current_stock {
                        Some(current) if value < 0 && value.unsigned_abs() > current => errors.add(
                            "adjustment",
                            format!("Cannot reduce stock below zero. Maximum reduction: {current}"),
                        ),
                        _ => {}
                    }
                    delta = value;
                }
            }
        }

        if self.reason.trim().is_empty() {
            errors.add("reason", "Reason is required");
        }

        errors.into_result(())?;

        let notes = self.notes.trim();
        let adjustment = StockAdjustment::new(product_id, delta, self.reason.trim());
        Ok(if notes.is_empty() {
            adjustment
        } else {
            adjustment.with_notes(notes)
        })
    }
}

/// Stock level the form previews while the user types. Unparsable input
/// previews as no change.
pub fn preview_stock(current: u64, raw_adjustment: &str) -> u64 {
    let delta = raw_adjustment.trim().parse::<i64>().unwrap_or(0);
    clamped_stock(current, delta)
}

/// Validate a raw absolute stock level (product edit form).
pub fn validate_inventory_level(raw: &str) -> Result<u64, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let parsed = raw.trim().parse::<u64>();
    if parsed.is_err() {
        errors.add("inventory", "Inventory must be a non-negative number");
    }
    errors.into_result(parsed.unwrap_or_default())
}
