use serde::Serialize;

use storefront_auth::{require_permission, AccessView, Permission, SessionProvider};
use storefront_core::{DomainError, DomainResult, StockLevel, StockThreshold};
use storefront_inventory::{
    summarize, InventorySummary, InventoryTableQuery, SortColumn, SortDirection, SortState,
};

use crate::context::StoreContext;
use crate::pages::split_pair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub price: String,
    pub last_updated: String,
    pub status: StockLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub summary: InventorySummary,
    pub rows: Vec<InventoryRow>,
    pub sort: SortState,
    /// Edit/add actions are shown only with `inventory.write`.
    pub can_edit: bool,
}

/// Inventory management page; requires `inventory.read`.
pub fn inventory_page<P>(
    ctx: &StoreContext,
    sessions: &P,
    table: &InventoryTableQuery,
) -> AccessView<InventoryView>
where
    P: SessionProvider + ?Sized,
{
    let threshold = StockThreshold::INVENTORY_TABLE;
    let currency = ctx.config.currency;

    require_permission(sessions, &ctx.roles, &Permission::INVENTORY_READ, |grant| {
        let rows = table
            .apply(&ctx.inventory)
            .into_iter()
            .map(|item| InventoryRow {
                id: item.id.to_string(),
                name: item.name.clone(),
                sku: item.sku.clone(),
                category: item.category.clone(),
                quantity: item.quantity,
                price: item.price.display(currency).to_string(),
                last_updated: item.last_updated.format("%Y-%m-%d").to_string(),
                status: StockLevel::classify(item.quantity, threshold),
            })
            .collect();

        InventoryView {
            summary: summarize(&ctx.inventory, threshold),
            rows,
            sort: table.sort,
            can_edit: grant.can(&Permission::INVENTORY_WRITE),
        }
    })
}

/// Build a table query from `key=value` pairs: `search=ssd`, `low-stock=true`,
/// `sort=quantity`, `dir=desc`.
pub fn table_query_from_pairs<I, S>(pairs: I) -> DomainResult<InventoryTableQuery>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut query = InventoryTableQuery::default();
    let mut direction = SortDirection::Asc;

    for pair in pairs {
        let (key, value) = split_pair(pair.as_ref())?;
        match key {
            "search" => query.search = value.to_string(),
            "low-stock" => {
                query.low_stock_only = match value.trim() {
                    "true" | "1" | "on" => Some(StockThreshold::INVENTORY_TABLE),
                    "false" | "0" | "off" => None,
                    other => {
                        return Err(DomainError::validation(format!(
                            "invalid low-stock flag '{other}'"
                        )));
                    }
                }
            }
            "sort" => query.sort.column = Some(value.parse::<SortColumn>()?),
            "dir" => {
                direction = match value.trim() {
                    "asc" => SortDirection::Asc,
                    "desc" => SortDirection::Desc,
                    other => {
                        return Err(DomainError::validation(format!(
                            "invalid sort direction '{other}'"
                        )));
                    }
                }
            }
            other => {
                return Err(DomainError::validation(format!(
                    "unknown inventory parameter '{other}'"
                )));
            }
        }
    }

    query.sort.direction = direction;
    Ok(query)
}
