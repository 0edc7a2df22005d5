//! Product registry: the single owner of product records.

use std::sync::Arc;

use indexmap::IndexMap;
use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::product::{NewProduct, Product, ProductPatch};

/// Mutation/query API over the product collection.
///
/// Callers never see the underlying collection; swapping the in-memory
/// registry for a persistent one only requires another implementation of
/// this trait. Records are handed out as `Arc<Product>` snapshots: a later
/// update replaces the record, it never mutates a snapshot someone holds.
pub trait ProductStore {
    /// Create a product under a freshly generated id.
    fn create(&mut self, data: NewProduct) -> DomainResult<Arc<Product>>;

    /// Insert a fully-formed product (seeding, imports). Fails with
    /// `Conflict` if the id is taken.
    fn insert(&mut self, product: Product) -> DomainResult<Arc<Product>>;

    fn get(&self, id: &ProductId) -> Option<Arc<Product>>;

    /// Merge `patch` into the product. Fails with `NotFound` if absent.
    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> DomainResult<Arc<Product>>;

    /// Remove the product. Returns `false` (and does nothing) if absent.
    fn delete(&mut self, id: &ProductId) -> bool;

    /// All products in insertion order.
    fn list(&self) -> Vec<Arc<Product>>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory registry (no persistence; contents live as long as the value).
///
/// Backed by an `IndexMap`, so listing keeps insertion order and lookups by
/// id stay O(1).
#[derive(Debug, Default)]
pub struct InMemoryProductRegistry {
    products: IndexMap<ProductId, Arc<Product>>,
}

impl InMemoryProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with `products`, in order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut registry = Self::new();
        for product in products {
            registry.insert(product)?;
        }
        Ok(registry)
    }
}

impl ProductStore for InMemoryProductRegistry {
    fn create(&mut self, data: NewProduct) -> DomainResult<Arc<Product>> {
        let mut id = ProductId::generate();
        while self.products.contains_key(&id) {
            id = ProductId::generate();
        }
        let product = Product::new(id, data)?;
        self.insert(product)
    }

    fn insert(&mut self, product: Product) -> DomainResult<Arc<Product>> {
        if self.products.contains_key(product.id_typed()) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id_typed()
            )));
        }
        let product = Arc::new(product);
        self.products
            .insert(product.id_typed().clone(), Arc::clone(&product));
        tracing::debug!(product_id = %product.id_typed(), "product registered");
        Ok(product)
    }

    fn get(&self, id: &ProductId) -> Option<Arc<Product>> {
        self.products.get(id).cloned()
    }

    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> DomainResult<Arc<Product>> {
        let slot = self
            .products
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;

        let mut next = Product::clone(slot);
        next.apply_patch(patch)?;
        let next = Arc::new(next);
        *slot = Arc::clone(&next);
        Ok(next)
    }

    fn delete(&mut self, id: &ProductId) -> bool {
        if self.products.shift_remove(id).is_none() {
            return false;
        }
        tracing::debug!(product_id = %id, "product removed");
        true
    }

    fn list(&self) -> Vec<Arc<Product>> {
        self.products.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.products.len()
    }
}
