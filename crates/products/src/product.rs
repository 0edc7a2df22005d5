use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, Money, ProductId, ValidationErrors};

/// A catalog product.
///
/// Fields are private: the registry is the only writer, and callers change a
/// product by submitting a [`ProductPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    category: String,
    price: Money,
    inventory: u64,
    is_active: bool,
    #[serde(default)]
    images: Vec<String>,
}

impl Product {
    /// Build a product from creation data. New products are always active.
    pub fn new(id: ProductId, data: NewProduct) -> DomainResult<Self> {
        validate_new_product(&data)?;
        Ok(Self {
            id,
            name: data.name,
            description: data.description,
            category: data.category,
            price: data.price,
            inventory: data.inventory,
            is_active: true,
            images: data.images,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn inventory(&self) -> u64 {
        self.inventory
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Value of the stock on hand (`price * inventory`).
    pub fn stock_value(&self) -> Money {
        self.price.times(self.inventory)
    }

    /// Merge a patch into this product. Fields left as `None` are untouched;
    /// the id never changes.
    pub fn apply_patch(&mut self, patch: ProductPatch) -> DomainResult<()> {
        validate_patch(&patch)?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(inventory) = patch.inventory {
            self.inventory = inventory;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creation data for a product (everything but the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Money,
    pub inventory: u64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for a product. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub inventory: Option<u64>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    /// Patch that only sets the stock level.
    pub fn inventory(level: u64) -> Self {
        Self {
            inventory: Some(level),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Field-level validation of product creation data.
///
/// Price and inventory are non-negative by construction, so only the text
/// fields can fail.
pub fn check_new_product(data: &NewProduct) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if data.name.trim().is_empty() {
        errors.add("name", "Product name is required");
    }
    if data.description.trim().is_empty() {
        errors.add("description", "Product description is required");
    }
    if data.category.trim().is_empty() {
        errors.add("category", "Category is required");
    }
    errors.into_result(())
}

pub fn validate_new_product(data: &NewProduct) -> DomainResult<()> {
    check_new_product(data).map_err(DomainError::from)
}

fn validate_patch(patch: &ProductPatch) -> DomainResult<()> {
    let mut errors = ValidationErrors::new();
    let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
    if blank(&patch.name) {
        errors.add("name", "Product name is required");
    }
    if blank(&patch.description) {
        errors.add("description", "Product description is required");
    }
    if blank(&patch.category) {
        errors.add("category", "Category is required");
    }
    errors.into_result(()).map_err(DomainError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> NewProduct {
        NewProduct {
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "Noise cancelling".to_string(),
            category: "electronics".to_string(),
            price: Money::from_cents(19_999),
            inventory: 25,
            images: vec![],
        }
    }

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn new_product_defaults_to_active() {
        let product = Product::new(pid("p1"), headphones()).unwrap();
        assert!(product.is_active());
        assert_eq!(product.id_typed(), &pid("p1"));
        assert_eq!(product.inventory(), 25);
    }

    #[test]
    fn new_product_reports_every_blank_field() {
        let mut data = headphones();
        data.name = "  ".to_string();
        data.category = String::new();

        let errors = check_new_product(&data).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));

        match Product::new(pid("p1"), data).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("category")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut product = Product::new(pid("p1"), headphones()).unwrap();
        product
            .apply_patch(ProductPatch {
                price: Some(Money::from_cents(17_999)),
                is_active: Some(false),
                ..ProductPatch::default()
            })
            .unwrap();

        assert_eq!(product.price(), Money::from_cents(17_999));
        assert!(!product.is_active());
        assert_eq!(product.name(), "Wireless Bluetooth Headphones");
        assert_eq!(product.inventory(), 25);
    }

    #[test]
    fn patch_with_blank_name_is_rejected_and_leaves_product_untouched() {
        let mut product = Product::new(pid("p1"), headphones()).unwrap();
        let before = product.clone();
        let err = product
            .apply_patch(ProductPatch {
                name: Some(" ".to_string()),
                inventory: Some(3),
                ..ProductPatch::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(product, before);
    }

    #[test]
    fn stock_value_is_price_times_inventory() {
        let product = Product::new(pid("p1"), headphones()).unwrap();
        assert_eq!(product.stock_value(), Money::from_cents(19_999 * 25));
    }

    #[test]
    fn json_shape_uses_cents_and_snake_case() {
        let product = Product::new(pid("prod-2"), headphones()).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "prod-2");
        assert_eq!(json["price"], 19_999);
        assert_eq!(json["is_active"], true);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn identity_ignores_field_changes() {
        let a = Product::new(pid("p1"), headphones()).unwrap();
        let mut b = a.clone();
        b.apply_patch(ProductPatch::inventory(0)).unwrap();
        assert_ne!(a, b);
        assert!(a.same_identity(&b));
    }
}
