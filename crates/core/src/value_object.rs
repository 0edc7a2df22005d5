//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attributes are equal.
/// They are immutable: "changing" one means building a new one.
///
/// - `Money { cents: 1999 }` is a value object
/// - `Product { id: ProductId(...), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
