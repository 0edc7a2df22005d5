//! Filtering and sorting of the inventory table.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockroom_products::Product;

use crate::status::StockStatus;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    InStock,
    LowStock,
    OutOfStock,
}

impl StatusFilter {
    fn matches(self, status: StockStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::InStock => status == StockStatus::InStock,
            StatusFilter::LowStock => status == StockStatus::LowStock,
            StatusFilter::OutOfStock => status == StockStatus::OutOfStock,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Inventory,
    Price,
    /// `price * inventory`.
    Value,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Inventory table query: search, category, status, then a stable sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of name or description.
    pub search: Option<String>,
    /// `None` means every category.
    pub category: Option<String>,
    pub status: StatusFilter,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn sort(mut self, sort_by: SortKey, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    fn matches(&self, product: &Product, threshold: u64, needle: Option<&str>) -> bool {
        let matches_search = needle.is_none_or(|needle| {
            product.name().to_lowercase().contains(needle)
                || product.description().to_lowercase().contains(needle)
        });
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|c| product.category() == c);

        matches_search
            && matches_category
            && self.status.matches(StockStatus::of(product, threshold))
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Name => compare_text(a.name(), b.name()),
            SortKey::Category => compare_text(a.category(), b.category()),
            SortKey::Inventory => a.inventory().cmp(&b.inventory()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Value => a.stock_value().cmp(&b.stock_value()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Products matching the query, sorted. Ties keep list order.
    pub fn apply(&self, products: &[Arc<Product>], threshold: u64) -> Vec<Arc<Product>> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<Arc<Product>> = products
            .iter()
            .filter(|p| self.matches(p, threshold, needle.as_deref()))
            .cloned()
            .collect();
        matched.sort_by(|a, b| self.compare(a, b));
        matched
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
