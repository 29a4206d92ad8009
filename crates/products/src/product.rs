use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{Entity, Money, ProductId, StockLevel, StockThreshold, Stocked};

/// Value of a product specification entry (`"20V"`, `215`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl core::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<f64> for SpecValue {
    fn from(value: f64) -> Self {
        SpecValue::Number(value)
    }
}

/// Read-only catalog entry.
///
/// Records come from the catalog data source and are never mutated after
/// loading; all views over them borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in minor units.
    pub price: Money,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub inventory: u32,
    #[serde(default)]
    pub featured: bool,
    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub specifications: BTreeMap<String, SpecValue>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.inventory > 0
    }

    /// Stock label shown on product cards ("Only 3 left").
    pub fn stock_label(&self) -> String {
        match StockLevel::classify(self.inventory, StockThreshold::PRODUCT_CARD) {
            StockLevel::OutOfStock => StockLevel::OutOfStock.label().to_string(),
            StockLevel::Low => format!("Only {} left", self.inventory),
            StockLevel::InStock => StockLevel::InStock.label().to_string(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Stocked for Product {
    fn quantity(&self) -> u32 {
        self.inventory
    }

    fn category(&self) -> &str {
        &self.category
    }
}
