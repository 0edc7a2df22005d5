//! Stock movements: the append-only record of every applied stock change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, MovementId, ProductId};

/// Direction of an applied stock change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    StockIn,
    StockOut,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::StockIn => "stock_in",
            MovementKind::StockOut => "stock_out",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applied stock change. Treat as a fact: created once, never edited.
///
/// `quantity` is the magnitude of the change that was actually applied, which
/// is smaller than the requested delta when clamping at zero kicked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    /// Product name at the time of the movement.
    pub product_name: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: u64,
    pub previous_stock: u64,
    pub new_stock: u64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

impl StockMovement {
    /// Signed change that was applied (`new_stock - previous_stock`).
    pub fn applied_delta(&self) -> i128 {
        i128::from(self.new_stock) - i128::from(self.previous_stock)
    }

    /// `true` when the applied change is smaller than `requested`.
    pub fn was_clamped(&self, requested: i64) -> bool {
        self.quantity < requested.unsigned_abs()
    }
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Append-only movement log, presented most-recent-first.
///
/// There is no API to edit or remove entries.
#[derive(Debug, Clone, Default)]
pub struct MovementLog {
    // Chronological; reversed on the way out.
    entries: Vec<StockMovement>,
}

impl MovementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, movement: StockMovement) {
        self.entries.push(movement);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent movement, if any.
    pub fn latest(&self) -> Option<&StockMovement> {
        self.entries.last()
    }

    /// All movements, most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &StockMovement> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// Movements of one product, most recent first.
    pub fn for_product<'a>(&'a self, product_id: &'a ProductId) -> impl Iterator<Item = &'a StockMovement> + 'a {
        self.iter().filter(move |m| &m.product_id == product_id)
    }

    /// Owned copy, most recent first.
    pub fn to_vec(&self) -> Vec<StockMovement> {
        self.iter().cloned().collect()
    }
}
