//! Text rendering of page views.
//!
//! [`render`] is the single dispatch point: gated pages arrive as an
//! `AccessView` and are matched exactly once here.

use std::fmt::Write as _;

use storefront_auth::AccessView;

use crate::pages::{
    CartView, CategoriesView, DashboardView, DealCard, DealsView, HomeView, InventoryView,
    ProductCard, ProductDetailView, ShopView,
};

/// Any renderable page.
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomeView),
    Shop(ShopView),
    ProductDetail(ProductDetailView),
    Categories(CategoriesView),
    Deals(DealsView),
    Cart(CartView),
    Dashboard(AccessView<DashboardView>),
    Inventory(AccessView<InventoryView>),
}

pub fn render(page: &Page) -> String {
    match page {
        Page::Home(view) => home(view),
        Page::Shop(view) => shop(view),
        Page::ProductDetail(view) => product_detail(view),
        Page::Categories(view) => categories(view),
        Page::Deals(view) => deals(view),
        Page::Cart(view) => cart(view),
        Page::Dashboard(access) => gated(access, dashboard),
        Page::Inventory(access) => gated(access, inventory),
    }
}

fn gated<T>(access: &AccessView<T>, body: fn(&T) -> String) -> String {
    match access {
        AccessView::Unauthenticated => "Please sign in to continue.\n".to_string(),
        AccessView::Unauthorized { missing } => {
            format!("Access denied: requires '{missing}'.\n")
        }
        AccessView::Authorized(view) => body(view),
    }
}

fn card_line(out: &mut String, card: &ProductCard) {
    let _ = writeln!(
        out,
        "  [{}] {} ({}) {} | {:.1}* ({}) | {}",
        card.id, card.name, card.category, card.price, card.rating, card.reviews, card.stock
    );
}

fn home(view: &HomeView) -> String {
    let mut out = String::from("Featured Products\n");
    for card in &view.featured {
        card_line(&mut out, card);
    }
    out.push_str("Shop by category\n");
    for link in &view.categories {
        let _ = writeln!(out, "  {} ({}) {}", link.category, link.count, link.href);
    }
    out
}

fn shop(view: &ShopView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Categories: {}", view.categories.join(", "));
    if view.is_empty() {
        out.push_str("No products found\n");
        return out;
    }
    let _ = writeln!(out, "Showing {} products", view.products.len());
    for card in &view.products {
        card_line(&mut out, card);
    }
    out
}

fn product_detail(view: &ProductDetailView) -> String {
    let mut out = String::new();
    card_line(&mut out, &view.product);
    let _ = writeln!(out, "  {}", view.description);
    for (key, value) in &view.specifications {
        let _ = writeln!(out, "    {key}: {value}");
    }
    if !view.related.is_empty() {
        out.push_str("Related:\n");
        for card in &view.related {
            card_line(&mut out, card);
        }
    }
    out
}

fn categories(view: &CategoriesView) -> String {
    let mut out = String::new();
    for c in &view.categories {
        let _ = writeln!(out, "  {} ({} products)", c.category, c.count);
    }
    out
}

fn deal_lines(out: &mut String, title: &str, deals: &[DealCard]) {
    let _ = writeln!(out, "{title}:");
    if deals.is_empty() {
        out.push_str("  none right now\n");
    }
    for deal in deals {
        let _ = writeln!(
            out,
            "  {} {} -> {} [{}] ends {} ({} left)",
            deal.product.name,
            deal.original_price,
            deal.product.price,
            deal.badge,
            deal.ends,
            deal.time_left
        );
    }
}

fn deals(view: &DealsView) -> String {
    let mut out = String::new();
    deal_lines(&mut out, "Flash deals", &view.flash);
    deal_lines(&mut out, "Weekly deals", &view.weekly);
    out
}

fn cart(view: &CartView) -> String {
    if view.is_empty() {
        return "Your cart is empty\n".to_string();
    }
    let mut out = String::new();
    for line in &view.lines {
        let _ = writeln!(
            out,
            "  {} x{} @ {} = {}",
            line.name, line.quantity, line.unit_price, line.line_total
        );
    }
    let _ = writeln!(out, "Items: {}", view.item_count);
    let _ = writeln!(out, "Subtotal: {}", view.subtotal);
    let _ = writeln!(out, "Tax: {}", view.tax);
    let _ = writeln!(out, "Shipping: {}", view.shipping);
    let _ = writeln!(out, "Total: {}", view.total);
    out
}

fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.greeting);
    let s = &view.catalog_summary;
    let _ = writeln!(
        out,
        "Products: {} | Units: {} | Low (<{}): {} | Out: {}",
        s.total_items,
        s.total_stock,
        s.threshold.value(),
        s.low_stock,
        s.out_of_stock
    );
    for card in &view.low_inventory {
        card_line(&mut out, card);
    }
    out
}

fn inventory(view: &InventoryView) -> String {
    let mut out = String::new();
    let s = &view.summary;
    let _ = writeln!(
        out,
        "Total products: {} | Total stock: {} | Low stock: {} | Out of stock: {}",
        s.total_items, s.total_stock, s.low_stock, s.out_of_stock
    );
    for total in s.by_category.iter() {
        let _ = writeln!(out, "  {}: {}", total.category, total.quantity);
    }
    if view.rows.is_empty() {
        out.push_str("No inventory items found\n");
        return out;
    }
    for row in &view.rows {
        let _ = writeln!(
            out,
            "  {} | {} | {} | {} | {} | {} | {}",
            row.sku,
            row.name,
            row.category,
            row.quantity,
            row.price,
            row.last_updated,
            row.status.label()
        );
    }
    if view.can_edit {
        out.push_str("(edit enabled)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_auth::Permission;

    #[test]
    fn gated_pages_dispatch_on_access() {
        let denied: Page = Page::Inventory(AccessView::Unauthorized {
            missing: Permission::INVENTORY_READ,
        });
        assert_eq!(render(&denied), "Access denied: requires 'inventory.read'.\n");

        let signed_out: Page = Page::Dashboard(AccessView::Unauthenticated);
        assert_eq!(render(&signed_out), "Please sign in to continue.\n");
    }

    #[test]
    fn empty_views_render_empty_states() {
        let cart = CartView {
            lines: Vec::new(),
            item_count: 0,
            subtotal: "$0.00".into(),
            tax: "$0.00".into(),
            shipping: "$0.00".into(),
            total: "$0.00".into(),
        };
        assert_eq!(render(&Page::Cart(cart)), "Your cart is empty\n");
    }
}
