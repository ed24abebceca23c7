use std::hint::black_box;

use common::Region;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{PizzaStore, SfaxStylePizzaStore, TunisStylePizzaStore, for_region};

fn bench_create_pizza(c: &mut Criterion) {
    let store = TunisStylePizzaStore;

    c.bench_function("domain/create_pizza", |b| {
        b.iter(|| store.create_pizza(black_box("clam")).unwrap());
    });
}

fn bench_create_pizza_unknown(c: &mut Criterion) {
    let store = SfaxStylePizzaStore;

    c.bench_function("domain/create_pizza_unknown", |b| {
        b.iter(|| store.create_pizza(black_box("anchovy")));
    });
}

fn bench_order_pizza(c: &mut Criterion) {
    let store = for_region(Region::Sfax);

    c.bench_function("domain/order_pizza", |b| {
        b.iter(|| store.order_pizza(black_box("pepperoni")).unwrap());
    });
}

criterion_group!(
    benches,
    bench_create_pizza,
    bench_create_pizza_unknown,
    bench_order_pizza,
);
criterion_main!(benches);
