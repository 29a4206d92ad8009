//! Stock-bearing records and stock level classification.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A record that carries an on-hand quantity and a category.
///
/// Implemented by catalog products and inventory items so the same
/// aggregations run over either list.
pub trait Stocked {
    fn quantity(&self) -> u32;
    fn category(&self) -> &str;
}

impl<T: Stocked + ?Sized> Stocked for &T {
    fn quantity(&self) -> u32 {
        (**self).quantity()
    }

    fn category(&self) -> &str {
        (**self).category()
    }
}

/// Quantity below which a record counts as low stock (strictly less than).
///
/// There is intentionally no `Default`: every caller names its threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockThreshold(u32);

impl ValueObject for StockThreshold {}

impl StockThreshold {
    /// Inventory table and inventory dashboard cards.
    pub const INVENTORY_TABLE: StockThreshold = StockThreshold(10);
    /// Product dashboard low-inventory list.
    pub const PRODUCT_DASHBOARD: StockThreshold = StockThreshold(20);
    /// Product cards show "Only N left" below this count (10 and under).
    pub const PRODUCT_CARD: StockThreshold = StockThreshold(11);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn is_low(self, quantity: u32) -> bool {
        quantity < self.0
    }
}

/// Badge-level stock classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    pub fn classify(quantity: u32, threshold: StockThreshold) -> Self {
        if quantity == 0 {
            StockLevel::OutOfStock
        } else if threshold.is_low(quantity) {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::InStock => "In Stock",
        }
    }
}
