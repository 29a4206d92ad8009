//! Dashboard aggregations over any stock-bearing records.

use serde::Serialize;

use storefront_core::{StockThreshold, Stocked};

pub fn total_count<T: Stocked>(items: &[T]) -> usize {
    items.len()
}

pub fn total_stock<T: Stocked>(items: &[T]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity())).sum()
}

/// Items whose quantity is strictly below `threshold` (out-of-stock included).
pub fn low_stock<T: Stocked>(items: &[T], threshold: StockThreshold) -> Vec<&T> {
    items
        .iter()
        .filter(|i| threshold.is_low(i.quantity()))
        .collect()
}

pub fn out_of_stock<T: Stocked>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|i| i.quantity() == 0).collect()
}

/// Summed quantity for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub quantity: u64,
}

/// Per-category quantity totals in first-seen category order.
///
/// Order is stable so charts render the same way on every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, category: &str, quantity: u32) {
        match self.0.iter_mut().find(|t| t.category == category) {
            Some(total) => total.quantity += u64::from(quantity),
            None => self.0.push(CategoryTotal {
                category: category.to_string(),
                quantity: u64::from(quantity),
            }),
        }
    }
}

pub fn by_category<T: Stocked>(items: &[T]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for item in items {
        totals.add(item.category(), item.quantity());
    }
    totals
}

/// Stat-card numbers for the inventory dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_stock: u64,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub threshold: StockThreshold,
    pub by_category: CategoryTotals,
}

pub fn summarize<T: Stocked>(items: &[T], threshold: StockThreshold) -> InventorySummary {
    let summary = InventorySummary {
        total_items: total_count(items),
        total_stock: total_stock(items),
        low_stock: low_stock(items, threshold).len(),
        out_of_stock: out_of_stock(items).len(),
        threshold,
        by_category: by_category(items),
    };

    tracing::debug!(
        items = summary.total_items,
        stock = summary.total_stock,
        low = summary.low_stock,
        out = summary.out_of_stock,
        "inventory summary"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::item;
    use crate::item::InventoryItem;

    fn quantities(items: &[&InventoryItem]) -> Vec<u32> {
        items.iter().map(|i| i.quantity).collect()
    }

    #[test]
    fn low_and_out_of_stock_match_example() {
        let items = vec![
            item("1", "a", 0),
            item("2", "a", 5),
            item("3", "b", 15),
            item("4", "b", 30),
        ];

        assert_eq!(
            quantities(&low_stock(&items, StockThreshold::INVENTORY_TABLE)),
            [0, 5]
        );
        assert_eq!(quantities(&out_of_stock(&items)), [0]);
        assert_eq!(
            quantities(&low_stock(&items, StockThreshold::PRODUCT_DASHBOARD)),
            [0, 5, 15]
        );
    }

    #[test]
    fn threshold_is_strict() {
        let items = vec![item("1", "a", 10), item("2", "a", 9)];
        assert_eq!(
            quantities(&low_stock(&items, StockThreshold::INVENTORY_TABLE)),
            [9]
        );
    }

    #[test]
    fn totals_and_categories() {
        let items = vec![
            item("1", "Processors", 15),
            item("2", "Processors", 8),
            item("3", "Graphics Cards", 5),
            item("4", "Memory", 0),
            item("5", "Graphics Cards", 12),
        ];

        assert_eq!(total_count(&items), 5);
        assert_eq!(total_stock(&items), 40);

        let totals = by_category(&items);
        let order: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(order, ["Processors", "Graphics Cards", "Memory"]);
        assert_eq!(totals.get("Processors"), Some(23));
        assert_eq!(totals.get("Graphics Cards"), Some(17));
        assert_eq!(totals.get("Memory"), Some(0));
        assert_eq!(totals.get("Storage"), None);
    }

    #[test]
    fn summarize_bundles_all_counts() {
        let items = vec![item("1", "a", 0), item("2", "a", 3), item("3", "b", 50)];
        let summary = summarize(&items, StockThreshold::INVENTORY_TABLE);

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_stock, 53);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.by_category.len(), 2);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let items: Vec<InventoryItem> = Vec::new();
        let summary = summarize(&items, StockThreshold::INVENTORY_TABLE);

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_stock, 0);
        assert_eq!(summary.low_stock, 0);
        assert_eq!(summary.out_of_stock, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn works_over_borrowed_records() {
        let owned = vec![item("1", "a", 2), item("2", "b", 0)];
        let borrowed: Vec<&InventoryItem> = owned.iter().collect();
        assert_eq!(total_stock(&borrowed), 2);
        assert_eq!(out_of_stock(&borrowed).len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_items() -> impl Strategy<Value = Vec<InventoryItem>> {
            prop::collection::vec(
                (prop::sample::select(vec!["a", "b", "c"]), 0u32..40),
                0..30,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (category, qty))| item(&i.to_string(), category, qty))
                    .collect()
            })
        }

        proptest! {
            /// Property: out-of-stock and positive-quantity items partition the input.
            #[test]
            fn out_of_stock_partitions_items(items in arb_items()) {
                let out = out_of_stock(&items);
                let stocked: Vec<&InventoryItem> = items.iter().filter(|i| i.quantity > 0).collect();

                prop_assert_eq!(out.len() + stocked.len(), items.len());
                prop_assert!(out.iter().all(|o| !stocked.iter().any(|s| s.id == o.id)));
            }

            /// Property: category totals add up to total stock.
            #[test]
            fn category_totals_sum_to_total_stock(items in arb_items()) {
                let totals = by_category(&items);
                let summed: u64 = totals.iter().map(|t| t.quantity).sum();
                prop_assert_eq!(summed, total_stock(&items));
            }

            /// Property: out-of-stock items are always low stock for any positive threshold.
            #[test]
            fn out_of_stock_is_subset_of_low_stock(items in arb_items(), threshold in 1u32..50) {
                let low = low_stock(&items, StockThreshold::new(threshold));
                for o in out_of_stock(&items) {
                    prop_assert!(low.iter().any(|l| l.id == o.id));
                }
            }
        }
    }
}
