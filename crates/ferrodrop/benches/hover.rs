//! Benchmarks for hover resolution

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ferrodrop::hover::{hit_test_zone, resolve_list};
use ferrodrop::{
    DragCoordinator, DragRegistry, DragStart, DropZoneDescriptor, ItemId, ItemRef, MeasureTable, Orientation,
    Rect, Vec2,
};

const ROW: f32 = 20.0;

fn column(count: usize) -> (Vec<ItemId>, MeasureTable) {
    let items: Vec<ItemId> = (0..count).map(|i| ItemId::new(format!("item{}", i))).collect();
    let mut table = MeasureTable::new();
    for (i, id) in items.iter().enumerate() {
        table.set_item(id.clone(), Rect::new(0.0, i as f32 * ROW, 100.0, ROW));
    }
    table.set_zone("list", Rect::new(0.0, 0.0, 100.0, count as f32 * ROW));
    (items, table)
}

fn bench_resolve_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_list");

    for count in [10, 100, 1000] {
        let (items, table) = column(count);
        let pointer = Vec2::new(50.0, count as f32 * ROW * 0.5 + 1.0);
        group.bench_with_input(BenchmarkId::new("own", count), &count, |b, _| {
            b.iter(|| black_box(resolve_list(&items, Some(0), Orientation::Vertical, pointer, &table)));
        });
        group.bench_with_input(BenchmarkId::new("foreign", count), &count, |b, _| {
            b.iter(|| black_box(resolve_list(&items, None, Orientation::Vertical, pointer, &table)));
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_zone");

    for count in [10, 100, 1000] {
        let mut registry = DragRegistry::new();
        let mut table = MeasureTable::new();
        for i in 0..count {
            let id = format!("zone{}", i);
            let inset = i as f32 * 0.1;
            table.set_zone(id.as_str(), Rect::new(inset, inset, 1000.0 - inset, 1000.0 - inset));
            let _ = registry.register(DropZoneDescriptor::new(id));
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(hit_test_zone(&registry, Vec2::new(500.0, 500.0), &table).map(|z| &z.id)));
        });
    }

    group.finish();
}

fn bench_pointer_updates(c: &mut Criterion) {
    c.bench_function("coordinator_pointer_sweep_100", |b| {
        let (items, table) = column(100);
        let mut dnd = DragCoordinator::new(table);
        let _ = dnd.register_zone(DropZoneDescriptor::new("list").list(Orientation::Vertical, items));

        b.iter(|| {
            let start = DragStart::new(ItemRef::new("item0", "row"), Vec2::new(50.0, 5.0)).from_zone("list", 0);
            let _ = dnd.begin_drag(start);
            for step in 0..100 {
                let _ = dnd.update_pointer(Vec2::new(50.0, step as f32 * ROW + 15.0));
            }
            black_box(dnd.release())
        });
    });
}

criterion_group!(benches, bench_resolve_list, bench_hit_test, bench_pointer_updates);
criterion_main!(benches);
