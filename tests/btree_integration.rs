//! End-to-end tests across the index and source layers.

use std::io::Write;

use ordindex::{BPlusTree, CompositeKey, CsvSource, Error, NodeSnapshot, RecordId, SharedIndex};
use tempfile::NamedTempFile;

fn key(a: i64, b: i64) -> CompositeKey {
    CompositeKey::new(a, b)
}

fn rid(n: u64) -> RecordId {
    RecordId::new(n)
}

/// Every structural invariant checkable from the outside, via `levels`
/// and `iter`.
fn assert_invariants(tree: &BPlusTree) {
    let levels = tree.levels();

    // Leaves only on the last level, internal nodes only above it
    for (depth, level) in levels.iter().enumerate() {
        for snapshot in level {
            match snapshot {
                NodeSnapshot::Leaf { entries } => {
                    assert_eq!(depth + 1, levels.len());
                    assert!(
                        entries.windows(2).all(|w| w[0].key < w[1].key),
                        "unsorted leaf"
                    );
                    assert!(entries.iter().all(|e| !e.rids.is_empty()));
                }
                NodeSnapshot::Internal { separators } => {
                    assert!(depth + 1 < levels.len());
                    assert!(!separators.is_empty(), "internal node with no separator");
                    assert!(
                        separators.windows(2).all(|w| w[0] < w[1]),
                        "unsorted separators"
                    );
                }
            }
        }
    }

    // The leaf chain yields the leaf level's entries, strictly ascending
    let chain: Vec<_> = tree.iter().map(|e| e.key).collect();
    assert!(chain.windows(2).all(|w| w[0] < w[1]));
    let mut leaf_keys = Vec::new();
    for snapshot in levels.last().unwrap() {
        if let NodeSnapshot::Leaf { entries } = snapshot {
            leaf_keys.extend(entries.iter().map(|e| e.key));
        }
    }
    assert_eq!(chain, leaf_keys);
}

#[test]
fn test_interleaved_inserts_and_deletes_hold_invariants() {
    let mut tree = BPlusTree::new();

    for i in 0..100i64 {
        tree.insert(key((i * 37) % 100, i % 4), rid(i as u64));
        if i % 3 == 0 {
            // Delete something known to be present
            tree.delete(key((i * 37) % 100, i % 4), None).unwrap();
        }
        assert_invariants(&tree);
    }
    assert!(!tree.is_empty());
}

#[test]
fn test_every_inserted_key_is_searchable_and_scannable() {
    let mut tree = BPlusTree::new();
    let keys: Vec<_> = (0..80i64).map(|i| key((i * 53) % 80, i)).collect();
    for (i, &k) in keys.iter().enumerate() {
        tree.insert(k, rid(i as u64));
    }

    for &k in &keys {
        assert!(tree.search(k).is_some(), "lost {k}");
    }

    let all = tree
        .range_search(key(i64::MIN, i64::MIN), key(i64::MAX, i64::MAX))
        .unwrap();
    assert_eq!(all.len(), keys.len());
}

#[test]
fn test_full_drain_releases_every_node() {
    for order in [3, 4, 5, 8] {
        let mut tree = BPlusTree::with_order(order).unwrap();
        for i in 0..200i64 {
            tree.insert(key(i, 0), rid(i as u64));
        }
        for i in 0..200i64 {
            tree.delete(key(i, 0), None).unwrap();
            assert_invariants(&tree);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1, "leaked nodes at order {order}");
    }
}

#[test]
fn test_duplicate_heavy_workload() {
    let mut tree = BPlusTree::new();
    // Ten keys, twenty records each
    for r in 0..200u64 {
        tree.insert(key((r % 10) as i64, 0), rid(r));
    }
    assert_eq!(tree.len(), 10);

    for k in 0..10i64 {
        let entry = tree.search(key(k, 0)).unwrap();
        assert_eq!(entry.rids.len(), 20);
        // Identifiers kept in insertion order
        assert!(entry.rids.windows(2).all(|w| w[0].0 < w[1].0));
    }

    // Peeling individual records never touches the structure
    let nodes = tree.node_count();
    for r in 0..19u64 {
        tree.delete(key(3, 0), Some(rid(r * 10 + 3))).unwrap();
    }
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(tree.search(key(3, 0)).unwrap().rids, vec![rid(193)]);
}

#[test]
fn test_failed_delete_leaves_tree_untouched() {
    let mut tree = BPlusTree::new();
    for i in 0..20i64 {
        tree.insert(key(i, i), rid(i as u64));
    }
    let before = tree.levels();

    assert!(matches!(
        tree.delete(key(50, 0), None),
        Err(Error::KeyNotFound(_))
    ));
    assert!(matches!(
        tree.delete(key(5, 5), Some(rid(999))),
        Err(Error::RecordNotFound { .. })
    ));
    assert_eq!(tree.levels(), before);
}

#[test]
fn test_csv_load_into_tree() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tid,sales,price").unwrap();
    for tid in 1..=50 {
        writeln!(file, "{tid},{},{}", (tid * 7) % 25, tid % 5).unwrap();
    }

    let source = CsvSource::open(file.path(), ("sales", "price"), "tid").unwrap();
    assert_eq!(source.len(), 50);

    let mut tree = BPlusTree::new();
    tree.bulk_load(source.range(1, source.len()).unwrap());
    assert_invariants(&tree);

    // Every row resolves and is indexed under its key
    for tid in 1..=50 {
        let (k, r) = source.record(tid).unwrap();
        let entry = tree.search(k).unwrap();
        assert!(entry.rids.contains(&r), "row {tid} not indexed");
    }
}

#[test]
fn test_shared_index_mixed_workload() {
    let index = SharedIndex::from_tree(BPlusTree::with_order(5).unwrap());
    let handles: Vec<_> = (0..4i64)
        .map(|t| {
            let index = index.clone();
            std::thread::spawn(move || {
                for i in 0..100i64 {
                    index.write().insert(key(t, i), rid(i as u64));
                    let _ = index.read().range_search(key(t, 0), key(t, i));
                }
                for i in 0..50i64 {
                    index.write().delete(key(t, i), None).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let tree = index.read();
    assert_eq!(tree.len(), 4 * 50);
    assert_invariants(&tree);
}
