//! Mock catalog used by the demo binary and tests.

use stockroom_core::{DomainResult, Money, ProductId};

use crate::product::{NewProduct, Product};

/// Category values the product form offers.
pub static CATEGORIES: &[&str] = &[
    "electronics",
    "clothing",
    "books",
    "home-garden",
    "sports",
];

/// The three products the storefront ships with.
pub fn mock_catalog() -> DomainResult<Vec<Product>> {
    let rows = [
        (
            "prod-1",
            "Wireless Bluetooth Headphones",
            "High-quality wireless headphones with noise cancellation and 30-hour battery life.",
            19_999,
            25,
            "electronics",
        ),
        (
            "prod-2",
            "Cotton Blend T-Shirt",
            "Comfortable cotton blend t-shirt available in multiple colors and sizes.",
            2_999,
            50,
            "clothing",
        ),
        (
            "prod-3",
            "JavaScript Programming Book",
            "Complete guide to modern JavaScript programming with practical examples.",
            4_999,
            15,
            "books",
        ),
    ];

    rows.into_iter()
        .map(|(id, name, description, cents, inventory, category)| {
            Product::new(
                ProductId::new(id)?,
                NewProduct {
                    name: name.to_string(),
                    description: description.to_string(),
                    category: category.to_string(),
                    price: Money::from_cents(cents),
                    inventory,
                    images: vec!["/api/placeholder/300/300".to_string()],
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{InMemoryProductRegistry, ProductStore};

    #[test]
    fn mock_catalog_loads_into_a_registry() {
        let registry = InMemoryProductRegistry::with_products(mock_catalog().unwrap()).unwrap();
        let ids: Vec<_> = registry.list().iter().map(|p| p.id_typed().to_string()).collect();
        assert_eq!(ids, vec!["prod-1", "prod-2", "prod-3"]);
        assert!(registry
            .list()
            .iter()
            .all(|p| CATEGORIES.contains(&p.category())));
    }
}
