//! Catalog data source: a JSON file or the built-in seed data.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use thiserror::Error;

use storefront_core::{first_duplicate_id, DomainError};
use storefront_inventory::InventoryItem;
use storefront_products::{Catalog, Product};
use storefront_sales::{Deal, ScheduledDeal};

const SEED_CATALOG: &str = include_str!("../data/catalog.json");
const SEED_INVENTORY: &str = include_str!("../data/inventory.json");
const SEED_DEALS: &str = include_str!("../data/deals.json");

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {what} data: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn parse<T: serde::de::DeserializeOwned>(what: &'static str, raw: &str) -> Result<T, DataSourceError> {
    serde_json::from_str(raw).map_err(|source| DataSourceError::Parse { what, source })
}

/// Load the product catalog from `path`, or the seed catalog when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, DataSourceError> {
    let products: Vec<Product> = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| DataSourceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse("catalog", &raw)?
        }
        None => parse("catalog", SEED_CATALOG)?,
    };

    let catalog = Catalog::new(products)?;
    tracing::info!(products = catalog.len(), from_file = path.is_some(), "catalog loaded");
    Ok(catalog)
}

/// Seed inventory records; ids must be unique.
pub fn seed_inventory() -> Result<Vec<InventoryItem>, DataSourceError> {
    let items: Vec<InventoryItem> = parse("inventory", SEED_INVENTORY)?;
    if let Some(id) = first_duplicate_id(&items) {
        return Err(DomainError::conflict(format!("duplicate inventory id '{id}'")).into());
    }
    Ok(items)
}

/// Seed deals, with end times counted from `opened_at`.
pub fn seed_deals(opened_at: DateTime<Utc>) -> Result<Vec<Deal>, DataSourceError> {
    let scheduled: Vec<ScheduledDeal> = parse("deals", SEED_DEALS)?;
    Ok(scheduled.iter().map(|d| d.starting_at(opened_at)).collect())
}
