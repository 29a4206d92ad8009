use chrono::{DateTime, Utc};

use storefront_auth::RolePolicy;
use storefront_inventory::InventoryItem;
use storefront_products::Catalog;
use storefront_sales::{CheckoutPolicy, Deal};

use crate::config::AppConfig;
use crate::seed::{self, DataSourceError};

/// Read-only data and policies shared by every page.
///
/// Built once at startup and passed to pages by reference.
#[derive(Debug, Clone)]
pub struct StoreContext {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub inventory: Vec<InventoryItem>,
    pub deals: Vec<Deal>,
    pub checkout: CheckoutPolicy,
    pub roles: RolePolicy,
}

impl StoreContext {
    /// Load the store as opened at `now`; seed deal schedules start then.
    pub fn load(config: AppConfig, now: DateTime<Utc>) -> Result<Self, DataSourceError> {
        let catalog = seed::load_catalog(config.catalog_path.as_deref())?;
        Ok(Self {
            catalog,
            inventory: seed::seed_inventory()?,
            deals: seed::seed_deals(now)?,
            checkout: CheckoutPolicy::for_currency(config.currency),
            roles: RolePolicy::default(),
            config,
        })
    }
}
