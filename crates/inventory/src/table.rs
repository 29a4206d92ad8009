//! Inventory table view: search, low-stock filter and column sorting.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::text::{locale_cmp, SearchTerm};
use storefront_core::{DomainError, StockThreshold};

use crate::item::InventoryItem;

/// Sortable table columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortColumn {
    Name,
    Sku,
    Category,
    Quantity,
    Price,
    LastUpdated,
}

impl SortColumn {
    fn compare(self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            SortColumn::Name => locale_cmp(&a.name, &b.name),
            SortColumn::Sku => locale_cmp(&a.sku, &b.sku),
            SortColumn::Category => locale_cmp(&a.category, &b.category),
            SortColumn::Quantity => a.quantity.cmp(&b.quantity),
            SortColumn::Price => a.price.cmp(&b.price),
            SortColumn::LastUpdated => a.last_updated.cmp(&b.last_updated),
        }
    }
}

impl FromStr for SortColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortColumn::Name),
            "sku" => Ok(SortColumn::Sku),
            "category" => Ok(SortColumn::Category),
            "quantity" => Ok(SortColumn::Quantity),
            "price" => Ok(SortColumn::Price),
            "last-updated" | "lastUpdated" => Ok(SortColumn::LastUpdated),
            other => Err(DomainError::validation(format!("unknown column '{other}'"))),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current table sort. No column means data order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Header click: same column flips direction, a new column starts ascending.
    pub fn toggle(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: Some(column),
                direction: self.direction.flipped(),
            }
        } else {
            Self::by(column, SortDirection::Asc)
        }
    }
}

/// Table query: search text, optional low-stock filter, sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryTableQuery {
    pub search: String,
    /// When set, only rows strictly below this quantity are kept.
    pub low_stock_only: Option<StockThreshold>,
    pub sort: SortState,
}

impl InventoryTableQuery {
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        let term = SearchTerm::new(&self.search);

        let mut rows: Vec<&InventoryItem> = items
            .iter()
            .filter(|item| match &term {
                Some(term) => term.matches_any([
                    item.name.as_str(),
                    item.sku.as_str(),
                    item.category.as_str(),
                ]),
                None => true,
            })
            .filter(|item| match self.low_stock_only {
                Some(threshold) => threshold.is_low(item.quantity),
                None => true,
            })
            .collect();

        if let Some(column) = self.sort.column {
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match self.sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        rows
    }
}
