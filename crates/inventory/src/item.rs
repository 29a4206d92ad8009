use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ItemId, Money, Stocked};

/// Inventory record as shown on the inventory dashboard and table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    /// Unit price in minor units.
    pub price: Money,
    pub last_updated: NaiveDate,
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn category(&self) -> &str {
        &self.category
    }
}
