use serde::Serialize;

use storefront_auth::{require_session, AccessView, SessionProvider};
use storefront_core::StockThreshold;
use storefront_inventory::{low_stock, summarize, InventorySummary};

use crate::context::StoreContext;
use crate::pages::ProductCard;

/// Signed-in account dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub catalog_summary: InventorySummary,
    /// Catalog products below the dashboard threshold.
    pub low_inventory: Vec<ProductCard>,
}

pub fn dashboard_page<P>(ctx: &StoreContext, sessions: &P) -> AccessView<DashboardView>
where
    P: SessionProvider + ?Sized,
{
    let threshold = StockThreshold::PRODUCT_DASHBOARD;
    let currency = ctx.config.currency;

    require_session(sessions, &ctx.roles, |grant| {
        let products = ctx.catalog.products();
        DashboardView {
            greeting: format!("Welcome, {}!", grant.session.greeting_name()),
            catalog_summary: summarize(products, threshold),
            low_inventory: low_stock(products, threshold)
                .into_iter()
                .map(|p| ProductCard::new(p, currency))
                .collect(),
        }
    })
}
