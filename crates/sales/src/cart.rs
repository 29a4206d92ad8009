use serde::Serialize;

use storefront_core::{Currency, DomainError, DomainResult, Money, ProductId};
use storefront_products::{Catalog, Product};

/// One cart line: a product snapshot and a quantity (always >= 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Outcome of a quantity change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuantityUpdate {
    Updated { quantity: u32 },
    /// Requested more than stock; quantity was set to what is available.
    Clamped { available: u32 },
    /// Quantity below 1, or the product is unknown or not in the cart.
    Ignored,
}

/// Tax and shipping rules applied at checkout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutPolicy {
    /// Tax rate in basis points (750 = 7.5%).
    pub tax_bps: u32,
    pub shipping_fee: Money,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_from: Money,
}

impl CheckoutPolicy {
    /// Fee schedule for the display currency. Amounts are in that currency's
    /// minor units: KES uses KSh 500 shipping, free from KSh 10,000; USD uses
    /// $5, free from $100.
    pub fn for_currency(currency: Currency) -> Self {
        let (shipping_fee, free_shipping_from) = match currency {
            Currency::Kes => (
                Money::from_major_minor(500, 0),
                Money::from_major_minor(10_000, 0),
            ),
            Currency::Usd => (Money::from_major_minor(5, 0), Money::from_major_minor(100, 0)),
        };
        Self {
            tax_bps: 750,
            shipping_fee,
            free_shipping_from,
        }
    }
}

impl Default for CheckoutPolicy {
    /// The USD schedule, matching the default display currency.
    fn default() -> Self {
        Self::for_currency(Currency::default())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Client-side shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product, merging with an existing line. The resulting quantity
    /// is clamped to the product's inventory.
    pub fn add(&mut self, product: &Product, quantity: u32) -> DomainResult<QuantityUpdate> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if !product.in_stock() {
            return Err(DomainError::OutOfStock {
                product: product.name.clone(),
            });
        }

        let existing = self.lines.iter().position(|l| l.product.id == product.id);
        let wanted = existing
            .map(|i| self.lines[i].quantity)
            .unwrap_or(0)
            .saturating_add(quantity);
        let (quantity, outcome) = clamp(wanted, product.inventory);

        match existing {
            Some(i) => self.lines[i].quantity = quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }

        Ok(outcome)
    }

    /// Set the quantity of a line, checking stock against the current catalog.
    pub fn update_quantity(&mut self, catalog: &Catalog, id: &ProductId, quantity: u32) -> QuantityUpdate {
        if quantity < 1 {
            return QuantityUpdate::Ignored;
        }
        let Some(product) = catalog.get(id) else {
            return QuantityUpdate::Ignored;
        };
        let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) else {
            return QuantityUpdate::Ignored;
        };

        let (quantity, outcome) = clamp(quantity, product.inventory);
        if let QuantityUpdate::Clamped { available } = outcome {
            tracing::debug!(product = %id, available, "cart quantity limited by stock");
        }
        line.quantity = quantity;
        outcome
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        self.lines.len() != before
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Subtotal, tax and shipping. An empty cart costs nothing.
    pub fn totals(&self, policy: &CheckoutPolicy) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal.basis_points(policy.tax_bps);
        let shipping = if self.is_empty() || subtotal >= policy.free_shipping_from {
            Money::ZERO
        } else {
            policy.shipping_fee
        };

        CartTotals {
            item_count: self.item_count(),
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}

fn clamp(wanted: u32, available: u32) -> (u32, QuantityUpdate) {
    if wanted > available {
        (available, QuantityUpdate::Clamped { available })
    } else {
        (wanted, QuantityUpdate::Updated { quantity: wanted })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn product(id: &str, price_minor: u64, inventory: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Money::from_minor(price_minor),
            image: String::new(),
            category: "tools".into(),
            inventory,
            featured: false,
            rating: 0.0,
            reviews: 0,
            specifications: BTreeMap::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product("1", 12_999, 45),
            product("2", 19_999, 3),
            product("3", 999, 0),
        ])
        .unwrap()
    }

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn add_merges_lines_and_clamps_to_stock() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let set = catalog.get(&id("2")).unwrap();
        assert_eq!(cart.add(set, 2).unwrap(), QuantityUpdate::Updated { quantity: 2 });
        assert_eq!(cart.add(set, 2).unwrap(), QuantityUpdate::Clamped { available: 3 });

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn add_rejects_out_of_stock_and_zero() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add(catalog.get(&id("3")).unwrap(), 1),
            Err(DomainError::OutOfStock { .. })
        ));
        assert!(cart.add(catalog.get(&id("1")).unwrap(), 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_ignores_invalid_requests() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(&id("1")).unwrap(), 1).unwrap();

        assert_eq!(cart.update_quantity(&catalog, &id("1"), 0), QuantityUpdate::Ignored);
        assert_eq!(cart.update_quantity(&catalog, &id("99"), 2), QuantityUpdate::Ignored);
        assert_eq!(cart.update_quantity(&catalog, &id("2"), 2), QuantityUpdate::Ignored);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn update_quantity_clamps_to_inventory() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(&id("2")).unwrap(), 1).unwrap();

        assert_eq!(
            cart.update_quantity(&catalog, &id("2"), 10),
            QuantityUpdate::Clamped { available: 3 }
        );
        assert_eq!(cart.lines()[0].quantity, 3);

        assert_eq!(
            cart.update_quantity(&catalog, &id("2"), 2),
            QuantityUpdate::Updated { quantity: 2 }
        );
    }

    #[test]
    fn remove_reports_whether_line_existed() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(&id("1")).unwrap(), 1).unwrap();

        assert!(cart.remove(&id("1")));
        assert!(!cart.remove(&id("1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_apply_tax_and_flat_shipping() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.get(&id("1")).unwrap(), 1).unwrap();
        cart.add(catalog.get(&id("2")).unwrap(), 1).unwrap();

        let totals = cart.totals(&CheckoutPolicy::for_currency(Currency::Kes));
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.subtotal, Money::from_minor(32_998));
        // 7.5% of 329.98 = 24.7485 -> 24.75
        assert_eq!(totals.tax, Money::from_minor(2_475));
        assert_eq!(totals.shipping, Money::from_major_minor(500, 0));
        assert_eq!(totals.total, Money::from_minor(32_998 + 2_475 + 50_000));

        let usd = cart.totals(&CheckoutPolicy::for_currency(Currency::Usd));
        assert_eq!(usd.shipping, Money::ZERO);
        assert_eq!(usd.total, Money::from_minor(32_998 + 2_475));
    }

    #[test]
    fn usd_schedule_charges_below_one_hundred() {
        let mut cart = Cart::new();
        cart.add(&product("9", 9_999, 5), 1).unwrap();

        let policy = CheckoutPolicy::default();
        assert_eq!(policy, CheckoutPolicy::for_currency(Currency::Usd));
        assert_eq!(cart.totals(&policy).shipping, Money::from_major_minor(5, 0));
    }

    #[test]
    fn shipping_is_free_at_threshold() {
        let policy = CheckoutPolicy::default();
        let pricey = product("9", policy.free_shipping_from.minor(), 5);
        let mut cart = Cart::new();
        cart.add(&pricey, 1).unwrap();

        assert_eq!(cart.totals(&policy).shipping, Money::ZERO);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = Cart::new().totals(&CheckoutPolicy::default());
        assert_eq!(totals.total, Money::ZERO);
        assert_eq!(totals.item_count, 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no sequence of adds/updates pushes a line above inventory.
            #[test]
            fn quantities_never_exceed_inventory(
                inventory in 1u32..50,
                ops in prop::collection::vec((any::<bool>(), 0u32..80), 1..20)
            ) {
                let catalog = Catalog::new(vec![product("1", 1_000, inventory)]).unwrap();
                let item = catalog.get(&id("1")).unwrap();
                let mut cart = Cart::new();

                for (is_add, qty) in ops {
                    if is_add {
                        let _ = cart.add(item, qty);
                    } else {
                        cart.update_quantity(&catalog, &id("1"), qty);
                    }
                    prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1 && l.quantity <= inventory));
                }
            }

            /// Property: tax is always 7.5% of the subtotal, rounded half-up.
            #[test]
            fn tax_tracks_subtotal(price in 1u64..1_000_000, qty in 1u32..10) {
                let mut cart = Cart::new();
                cart.add(&product("1", price, 100), qty).unwrap();
                let totals = cart.totals(&CheckoutPolicy::default());

                let exact = u128::from(totals.subtotal.minor()) * 750;
                prop_assert_eq!(u128::from(totals.tax.minor()), (exact + 5_000) / 10_000);
                prop_assert_eq!(totals.total, totals.subtotal + totals.tax + totals.shipping);
            }
        }
    }
}
