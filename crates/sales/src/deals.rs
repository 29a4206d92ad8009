//! Discounted catalog views for the deals page.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId};
use storefront_products::{Catalog, Product};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealKind {
    Flash,
    Weekly,
}

/// A discount scheduled for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub product_id: ProductId,
    /// Whole percent off, 1 to 99.
    pub discount_percent: u8,
    pub kind: DealKind,
    pub ends_at: DateTime<Utc>,
}

/// A deal whose end time is relative to when the store opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDeal {
    pub product_id: ProductId,
    pub discount_percent: u8,
    pub kind: DealKind,
    pub ends_in_hours: u32,
}

impl ScheduledDeal {
    /// Pin the schedule to `opened_at`.
    pub fn starting_at(&self, opened_at: DateTime<Utc>) -> Deal {
        Deal {
            product_id: self.product_id.clone(),
            discount_percent: self.discount_percent,
            kind: self.kind,
            ends_at: opened_at + Duration::hours(i64::from(self.ends_in_hours)),
        }
    }
}

/// A product with its deal applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DealProduct<'a> {
    pub product: &'a Product,
    pub original_price: Money,
    pub sale_price: Money,
    pub discount_percent: u8,
    pub kind: DealKind,
    pub ends_at: DateTime<Utc>,
}

impl DealProduct<'_> {
    pub fn savings(&self) -> Money {
        Money::from_minor(self.original_price.minor() - self.sale_price.minor())
    }

    /// A deal runs until, but not including, `ends_at`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.ends_at
    }
}

/// Deals resolved against the catalog, in deal order.
#[derive(Debug, Clone)]
pub struct DealBoard<'a> {
    deals: Vec<DealProduct<'a>>,
}

impl<'a> DealBoard<'a> {
    /// Resolve deals against the catalog.
    ///
    /// Deals for products missing from the catalog are skipped. A discount
    /// outside 1..=99 is an error: the schedule is data we own.
    pub fn new(catalog: &'a Catalog, deals: &[Deal]) -> DomainResult<Self> {
        let mut resolved = Vec::with_capacity(deals.len());

        for deal in deals {
            if !(1..=99).contains(&deal.discount_percent) {
                return Err(DomainError::validation(format!(
                    "deal for '{}' has discount {}%, expected 1-99",
                    deal.product_id, deal.discount_percent
                )));
            }

            let Some(product) = catalog.get(&deal.product_id) else {
                tracing::warn!(product = %deal.product_id, "deal references unknown product");
                continue;
            };

            resolved.push(DealProduct {
                product,
                original_price: product.price,
                sale_price: product.price.discounted(deal.discount_percent),
                discount_percent: deal.discount_percent,
                kind: deal.kind,
                ends_at: deal.ends_at,
            });
        }

        Ok(Self { deals: resolved })
    }

    pub fn all(&self) -> &[DealProduct<'a>] {
        &self.deals
    }

    pub fn flash(&self) -> Vec<&DealProduct<'a>> {
        self.of_kind(DealKind::Flash)
    }

    pub fn weekly(&self) -> Vec<&DealProduct<'a>> {
        self.of_kind(DealKind::Weekly)
    }

    fn of_kind(&self, kind: DealKind) -> Vec<&DealProduct<'a>> {
        self.deals.iter().filter(|d| d.kind == kind).collect()
    }
}
