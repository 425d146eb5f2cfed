//! Performance benchmarks for visibility recomputation.
//!
//! Run with: cargo bench --bench recompute_benchmark
//!
//! Every toggle triggers a full recompute, so its cost bounds how large a
//! catalog stays responsive.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use facet_filter::filter::{FacetWidget, FilterEngine, MatchMode, SelectionState};
use facet_filter::model::{Catalog, Facet, Item};
use std::hint::black_box;

const FACETS: usize = 20;
const ITEMS_PER_GROUP: usize = 10;

/// Generate a catalog with `items` items spread over groups of ten.
fn generate_catalog(items: usize) -> Catalog {
    let mut builder = Catalog::builder();
    for f in 0..FACETS {
        builder.push_facet(Facet::new(format!("tag-{f}")));
    }
    for g in 0..(items + ITEMS_PER_GROUP - 1) / ITEMS_PER_GROUP {
        builder.push_group(format!("group-{g}"), None);
    }
    for i in 0..items {
        let facets = [i % FACETS, (i * 7) % FACETS, (i / 3) % FACETS]
            .map(|f| format!("tag-{f}"));
        builder.push_item(
            Item::new(format!("item-{i}"), format!("group-{}", i / ITEMS_PER_GROUP))
                .with_facets(facets),
        );
    }
    builder.build().expect("generated catalog is valid")
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    let selection: SelectionState = ["tag-1", "tag-4", "tag-9"].into_iter().collect();

    for size in [100, 1_000, 10_000] {
        let catalog = generate_catalog(size);
        for mode in MatchMode::all() {
            let engine = FilterEngine::new(*mode);
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &catalog, |b, catalog| {
                b.iter(|| black_box(engine.recompute(black_box(&selection), catalog)));
            });
        }
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut widget = FacetWidget::new(generate_catalog(1_000), MatchMode::Any);
    c.bench_function("widget_toggle_1000", |b| {
        b.iter(|| {
            widget.toggle_facet(black_box("tag-3"));
        });
    });
}

criterion_group!(benches, bench_recompute, bench_toggle);
criterion_main!(benches);
