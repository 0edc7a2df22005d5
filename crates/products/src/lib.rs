//! Product catalog module.
//!
//! Owns product records and the registry that hands them out. Pure in-memory
//! logic (no IO, no HTTP, no storage).

pub mod product;
pub mod registry;
pub mod seed;

pub use product::{NewProduct, Product, ProductPatch, check_new_product, validate_new_product};
pub use registry::{InMemoryProductRegistry, ProductStore};
