use criterion::{Criterion, black_box, criterion_group, criterion_main};

use solobill_catalog::CatalogItem;
use solobill_core::{ItemId, Money};
use solobill_sales::{DraftOrder, Quantity};

fn build_order(lines: i64) -> DraftOrder {
    let mut order = DraftOrder::new();
    for id in 0..lines {
        let item = CatalogItem::new(
            ItemId::new(id),
            format!("item-{id}"),
            Money::from_cents(100),
            Money::from_cents(150 + id),
        );
        order.add_line(&item, Quantity::new(3).unwrap_or(Quantity::ONE));
    }
    order.set_discount(Money::from_cents(250));
    order
}

fn bench_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("draft_totals");

    for size in [10, 100, 1_000] {
        let order = build_order(size);
        group.bench_function(format!("totals_{size}_lines"), |b| {
            b.iter(|| black_box(&order).totals())
        });
    }

    group.bench_function("add_line_merge_100", |b| {
        let item = CatalogItem::new(ItemId::new(50), "hot", Money::ZERO, Money::from_cents(99));
        b.iter(|| {
            let mut order = build_order(100);
            order.add_line(black_box(&item), Quantity::ONE);
            order
        })
    });

    group.finish();
}

criterion_group!(benches, bench_totals);
criterion_main!(benches);
