use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ProductId};
use storefront_products::CategoryCount;

use crate::context::StoreContext;
use crate::pages::ProductCard;

const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub product: ProductCard,
    pub description: String,
    pub in_stock: bool,
    /// Specification entries in key order.
    pub specifications: Vec<(String, String)>,
    pub related: Vec<ProductCard>,
}

pub fn product_detail_page(ctx: &StoreContext, id: &str) -> DomainResult<ProductDetailView> {
    let id: ProductId = id.parse()?;
    let product = ctx
        .catalog
        .get(&id)
        .ok_or_else(|| DomainError::not_found("product", &id))?;
    let currency = ctx.config.currency;

    Ok(ProductDetailView {
        product: ProductCard::new(product, currency),
        description: product.description.clone(),
        in_stock: product.in_stock(),
        specifications: product
            .specifications
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect(),
        related: ctx
            .catalog
            .related(product, RELATED_LIMIT)
            .into_iter()
            .map(|p| ProductCard::new(p, currency))
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<CategoryCount>,
}

pub fn categories_page(ctx: &StoreContext) -> CategoriesView {
    CategoriesView {
        categories: ctx.catalog.category_counts(),
    }
}
