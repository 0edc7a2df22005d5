use std::sync::Arc;

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_core::{Money, ProductId};
use stockroom_inventory::{ProductQuery, SortKey, SortOrder, StockEngine, compute_metrics, generate_alerts};
use stockroom_products::{InMemoryProductRegistry, NewProduct, Product};

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            Product::new(
                ProductId::new(format!("p{i}")).expect("valid id"),
                NewProduct {
                    name: format!("Product {i}"),
                    description: "bench".to_string(),
                    category: ["electronics", "clothing", "books"][i % 3].to_string(),
                    price: Money::from_cents(100 + (i as u64 % 50) * 37),
                    inventory: (i as u64 * 7) % 40,
                    images: vec![],
                },
            )
            .expect("valid product")
        })
        .collect()
}

fn bench_derivations(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivations");
    for size in [100usize, 1_000, 10_000] {
        let products: Vec<Arc<Product>> = catalog(size).into_iter().map(Arc::new).collect();
        let at = Utc::now();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("generate_alerts", size), &products, |b, p| {
            b.iter(|| generate_alerts(black_box(p), 10, at))
        });
        group.bench_with_input(BenchmarkId::new("compute_metrics", size), &products, |b, p| {
            b.iter(|| compute_metrics(black_box(p), 10))
        });
        group.bench_with_input(BenchmarkId::new("query_by_value", size), &products, |b, p| {
            let query = ProductQuery::new().sort(SortKey::Value, SortOrder::Desc);
            b.iter(|| query.apply(black_box(p), 10))
        });
    }
    group.finish();
}

fn bench_adjustments(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjustments");
    let size = 1_000;
    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("adjust_each_product_once", |b| {
        b.iter_batched(
            || {
                StockEngine::new(
                    InMemoryProductRegistry::with_products(catalog(size)).expect("unique ids"),
                )
            },
            |mut engine| {
                for i in 0..size {
                    let id = ProductId::new(format!("p{i}")).expect("valid id");
                    let _ = engine.adjust_stock(&id, -3, "bench");
                }
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_derivations, bench_adjustments);
criterion_main!(benches);
