use serde::Serialize;

use crate::context::StoreContext;
use crate::pages::ProductCard;

/// Link into the shop pre-filtered to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub category: String,
    pub count: usize,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategoryLink>,
}

/// Landing page: featured products in catalog order, then category links.
pub fn home_page(ctx: &StoreContext) -> HomeView {
    let currency = ctx.config.currency;

    HomeView {
        featured: ctx
            .catalog
            .featured()
            .into_iter()
            .map(|p| ProductCard::new(p, currency))
            .collect(),
        categories: ctx
            .catalog
            .category_counts()
            .into_iter()
            .map(|c| CategoryLink {
                href: format!("/shop?category={}", c.category),
                category: c.category,
                count: c.count,
            })
            .collect(),
    }
}
