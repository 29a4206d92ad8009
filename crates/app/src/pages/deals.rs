use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::DomainResult;
use storefront_sales::{DealBoard, DealProduct};

use crate::context::StoreContext;
use crate::pages::ProductCard;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealCard {
    pub product: ProductCard,
    pub original_price: String,
    pub badge: String,
    /// Short end date, e.g. "Oct 18".
    pub ends: String,
    /// Remaining time, e.g. "1d 4h" or "35m".
    pub time_left: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealsView {
    pub flash: Vec<DealCard>,
    pub weekly: Vec<DealCard>,
}

/// Deals still running at `now`, split into flash and weekly.
pub fn deals_page(ctx: &StoreContext, now: DateTime<Utc>) -> DomainResult<DealsView> {
    let board = DealBoard::new(&ctx.catalog, &ctx.deals)?;
    let currency = ctx.config.currency;

    let card = |deal: &DealProduct<'_>| {
        let mut product = ProductCard::new(deal.product, currency);
        product.price = deal.sale_price.display(currency).to_string();
        DealCard {
            product,
            original_price: deal.original_price.display(currency).to_string(),
            badge: format!("{}% OFF", deal.discount_percent),
            ends: deal.ends_at.format("%b %-d").to_string(),
            time_left: time_left(deal.ends_at - now),
        }
    };
    let active = |deals: Vec<&DealProduct<'_>>| -> Vec<DealCard> {
        deals
            .into_iter()
            .filter(|d| d.is_active(now))
            .map(card)
            .collect()
    };

    let view = DealsView {
        flash: active(board.flash()),
        weekly: active(board.weekly()),
    };
    tracing::debug!(
        scheduled = board.all().len(),
        active = view.flash.len() + view.weekly.len(),
        "deals resolved"
    );
    Ok(view)
}

fn time_left(remaining: chrono::Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    let (days, hours, minutes) = (minutes / 1_440, minutes / 60 % 24, minutes % 60);
    match (days, hours) {
        (0, 0) => format!("{minutes}m"),
        (0, _) => format!("{hours}h {minutes}m"),
        _ => format!("{days}d {hours}h"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_left_uses_largest_units() {
        assert_eq!(time_left(Duration::minutes(35)), "35m");
        assert_eq!(time_left(Duration::minutes(125)), "2h 5m");
        assert_eq!(time_left(Duration::hours(28) + Duration::minutes(10)), "1d 4h");
        assert_eq!(time_left(Duration::minutes(-5)), "0m");
    }
}
