use serde::Serialize;

use storefront_core::Money;
use storefront_sales::Cart;

use crate::context::StoreContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: String,
    pub tax: String,
    /// "Free" when waived.
    pub shipping: String,
    pub total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn cart_page(ctx: &StoreContext, cart: &Cart) -> CartView {
    let currency = ctx.config.currency;
    let totals = cart.totals(&ctx.checkout);

    CartView {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                product_id: line.product.id.to_string(),
                name: line.product.name.clone(),
                unit_price: line.product.price.display(currency).to_string(),
                quantity: line.quantity,
                line_total: line.line_total().display(currency).to_string(),
            })
            .collect(),
        item_count: totals.item_count,
        subtotal: totals.subtotal.display(currency).to_string(),
        tax: totals.tax.display(currency).to_string(),
        shipping: if totals.shipping == Money::ZERO && !cart.is_empty() {
            "Free".to_string()
        } else {
            totals.shipping.display(currency).to_string()
        },
        total: totals.total.display(currency).to_string(),
    }
}
