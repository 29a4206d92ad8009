//! Shop query benchmarks.
//!
//! Run with: `cargo bench -p storefront-products`

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use storefront_core::{Money, ProductId};
use storefront_products::{query, Catalog, FilterConfig, PriceRange, Product, SortOption};

const CATEGORIES: [&str; 5] = ["tools", "electrical", "plumbing", "safety", "paint"];

fn build_catalog(size: usize) -> Catalog {
    let products = (0..size)
        .map(|i| Product {
            id: ProductId::new(i.to_string()),
            name: format!("Product {i}"),
            description: format!("Durable item number {i} for the workshop"),
            price: Money::from_minor((i as u64 * 7_919) % 30_000),
            image: String::new(),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            inventory: (i % 40) as u32,
            featured: i % 7 == 0,
            rating: (i % 50) as f64 / 10.0,
            reviews: (i % 200) as u32,
            specifications: BTreeMap::new(),
        })
        .collect();
    Catalog::new(products).expect("unique ids")
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_query");

    for size in [20usize, 200, 2_000] {
        let catalog = build_catalog(size);

        let unfiltered = FilterConfig::default();
        group.bench_with_input(BenchmarkId::new("featured", size), &catalog, |b, catalog| {
            b.iter(|| query(black_box(catalog), black_box(&unfiltered)))
        });

        let filtered = FilterConfig {
            category: Some("tools".into()),
            search: "workshop".into(),
            price: PriceRange::new(Money::from_minor(1_000), Money::from_minor(20_000))
                .expect("valid range"),
            in_stock_only: true,
            min_rating: 2.5,
            sort: SortOption::PriceAsc,
        };
        group.bench_with_input(BenchmarkId::new("all_filters", size), &catalog, |b, catalog| {
            b.iter(|| query(black_box(catalog), black_box(&filtered)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
