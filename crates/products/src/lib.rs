//! Products domain module.
//!
//! This crate holds the read-only product catalog and the shop query engine,
//! implemented purely as deterministic logic over borrowed data (no IO, no
//! rendering, no storage).

pub mod catalog;
pub mod product;
pub mod query;

pub use catalog::{Catalog, CategoryCount};
pub use product::{Product, SpecValue};
pub use query::{query, FilterConfig, PriceRange, SortOption};
