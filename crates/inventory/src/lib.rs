//! Inventory domain module.
//!
//! Read-only inventory records plus the dashboard aggregations and the
//! searchable/sortable inventory table. Everything here is a pure function of
//! its inputs (no IO, no rendering).

pub mod item;
pub mod summary;
pub mod table;

pub use item::InventoryItem;
pub use summary::{
    by_category, low_stock, out_of_stock, summarize, total_count, total_stock, CategoryTotal,
    CategoryTotals, InventorySummary,
};
pub use table::{InventoryTableQuery, SortColumn, SortDirection, SortState};
