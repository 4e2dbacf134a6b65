//! Performance benchmarks for contact registration.
//!
//! These benchmarks measure:
//! - Adding distinct contacts to a fresh registry
//! - Rejecting duplicates against a populated registry
//! - Enumerating registries of different sizes

use contact_registry::ContactRegistry;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn populated_registry(size: usize) -> ContactRegistry {
    let registry = ContactRegistry::new();
    for i in 0..size {
        let _ = registry.add_contact(&format!("First{}", i), "Last", "0123456789");
    }
    registry
}

fn bench_add_distinct(c: &mut Criterion) {
    c.bench_function("add_distinct_100", |b| {
        b.iter(|| black_box(populated_registry(100)));
    });
}

fn bench_add_duplicate(c: &mut Criterion) {
    let registry = populated_registry(1_000);

    c.bench_function("add_duplicate", |b| {
        b.iter(|| black_box(registry.add_contact("First500", "Last", "0123456789")));
    });
}

fn bench_get_all_contacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all_contacts");

    for size in [10, 100, 1_000] {
        let registry = populated_registry(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| black_box(registry.get_all_contacts()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_distinct,
    bench_add_duplicate,
    bench_get_all_contacts
);
criterion_main!(benches);
