//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no UI concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MovementId, ProductId};
pub use money::Money;
pub use validation::ValidationErrors;
pub use value_object::ValueObject;
