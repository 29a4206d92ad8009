//! `storefront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod stock;
pub mod text;
pub mod value_object;

pub use entity::{find_by_id, first_duplicate_id, Entity};
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, ProductId};
pub use money::{Currency, Money};
pub use stock::{StockLevel, StockThreshold, Stocked};
pub use value_object::ValueObject;
