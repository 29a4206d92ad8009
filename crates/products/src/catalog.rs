use serde::Serialize;

use storefront_core::{find_by_id, first_duplicate_id, DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Number of products in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// The static product catalog.
///
/// Built once from the data source and handed to pages and queries by
/// reference. Catalog order is meaningful: it doubles as recency order for the
/// `newest` sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        if let Some(id) = first_duplicate_id(&products) {
            return Err(DomainError::conflict(format!("duplicate product id '{id}'")));
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Other products in the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.category_counts_iter().map(|(c, _)| c).collect()
    }

    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.category_counts_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect()
    }

    fn category_counts_iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for product in &self.products {
            match counts.iter_mut().find(|(c, _)| *c == product.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((product.category.as_str(), 1)),
            }
        }
        counts.into_iter()
    }
}
