//! Page controllers.
//!
//! Every page is a function from injected data to a view struct. Admin and
//! account pages go through `storefront_auth` once and hand back an
//! `AccessView`.

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod deals;
pub mod home;
pub mod inventory;
pub mod shop;

use serde::Serialize;

use storefront_core::{Currency, DomainError, DomainResult};
use storefront_products::Product;

pub use cart::{cart_page, CartLineView, CartView};
pub use catalog::{categories_page, product_detail_page, CategoriesView, ProductDetailView};
pub use dashboard::{dashboard_page, DashboardView};
pub use deals::{deals_page, DealCard, DealsView};
pub use home::{home_page, CategoryLink, HomeView};
pub use inventory::{inventory_page, table_query_from_pairs, InventoryRow, InventoryView};
pub use shop::{shop_page, ShopParams, ShopView};

/// Product tile shared by the home, shop, detail, deals and dashboard pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: f64,
    pub reviews: u32,
    pub stock: String,
    pub featured: bool,
}

impl ProductCard {
    pub fn new(product: &Product, currency: Currency) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.display(currency).to_string(),
            rating: product.rating,
            reviews: product.reviews,
            stock: product.stock_label(),
            featured: product.featured,
        }
    }
}

/// Split a `key=value` argument.
fn split_pair(arg: &str) -> DomainResult<(&str, &str)> {
    arg.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .ok_or_else(|| DomainError::validation(format!("expected key=value, got '{arg}'")))
}
