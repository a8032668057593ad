//! Micro benchmarks for the tree engine.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ordindex::{BPlusTree, CompositeKey, RecordId};

const INSERT_COUNT: i64 = 10_000;
const RANGE_WIDTH: i64 = 500;

/// Deterministic full-period permutation of 0..INSERT_COUNT; no rand
/// dependency needed.
fn scattered_key(i: i64) -> CompositeKey {
    CompositeKey::new((i * 7919) % INSERT_COUNT, i % 8)
}

fn loaded_tree(order: usize) -> BPlusTree {
    let mut tree = BPlusTree::with_order(order).unwrap();
    for i in 0..INSERT_COUNT {
        tree.insert(scattered_key(i), RecordId::new(i as u64));
    }
    tree
}

fn tree_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_ops");

    group.throughput(Throughput::Elements(INSERT_COUNT as u64));
    group.bench_function("sequential_insert", |b| {
        b.iter_batched(
            BPlusTree::new,
            |mut tree| {
                for i in 0..INSERT_COUNT {
                    tree.insert(CompositeKey::new(i, 0), RecordId::new(i as u64));
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        );
    });

    group.throughput(Throughput::Elements(INSERT_COUNT as u64));
    group.bench_function("scattered_insert", |b| {
        b.iter_batched(
            BPlusTree::new,
            |mut tree| {
                for i in 0..INSERT_COUNT {
                    tree.insert(scattered_key(i), RecordId::new(i as u64));
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        );
    });

    let tree = loaded_tree(3);
    group.throughput(Throughput::Elements(INSERT_COUNT as u64));
    group.bench_function("point_search", |b| {
        b.iter(|| {
            for i in 0..INSERT_COUNT {
                black_box(tree.search(scattered_key(i)));
            }
        });
    });

    group.throughput(Throughput::Elements(RANGE_WIDTH as u64));
    group.bench_function("range_scan", |b| {
        b.iter(|| {
            let hits = tree
                .range_search(
                    CompositeKey::new(1000, 0),
                    CompositeKey::new(1000 + RANGE_WIDTH, 0),
                )
                .unwrap();
            black_box(hits.len());
        });
    });

    group.throughput(Throughput::Elements(INSERT_COUNT as u64));
    group.bench_function("scattered_delete", |b| {
        b.iter_batched(
            || loaded_tree(3),
            |mut tree| {
                for i in 0..INSERT_COUNT {
                    tree.delete(scattered_key(i), None).unwrap();
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        );
    });

    // Wider nodes trade deeper vectors for a shallower tree
    group.bench_function("scattered_insert_order_32", |b| {
        b.iter_batched(
            || BPlusTree::with_order(32).unwrap(),
            |mut tree| {
                for i in 0..INSERT_COUNT {
                    tree.insert(scattered_key(i), RecordId::new(i as u64));
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, tree_ops);
criterion_main!(benches);
