//! Inventory module: stock adjustments, movement history, alerts and
//! dashboard metrics over the product catalog.
//!
//! Deterministic, in-memory domain logic (no IO, no HTTP, no storage). The
//! stock engine is the only writer of stock levels; alerts and metrics are
//! pure derivations of the current product list and threshold.

pub mod alerts;
pub mod config;
pub mod engine;
pub mod form;
pub mod metrics;
pub mod movement;
pub mod notify;
pub mod query;
pub mod service;
pub mod status;

pub use alerts::{Alert, AlertBoard, AlertId, AlertKind, AlertPriority, generate_alerts};
pub use config::InventoryConfig;
pub use engine::{BulkAdjustError, StockAdjustment, StockEngine, clamped_stock};
pub use form::{AdjustmentForm, STOCK_ADJUSTMENT_REASONS, preview_stock, validate_inventory_level};
pub use metrics::{InventoryMetrics, compute_metrics};
pub use movement::{MovementKind, MovementLog, StockMovement};
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use query::{ProductQuery, SortKey, SortOrder, StatusFilter};
pub use service::InventoryService;
pub use status::{StockStatus, low_stock_products, out_of_stock_products};
