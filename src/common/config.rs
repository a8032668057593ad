//! Configuration constants and occupancy thresholds.

/// Branching factor used by [`BPlusTree::new`](crate::BPlusTree::new).
///
/// Order 3 is the smallest tree that can rebalance at all; it keeps
/// nodes tiny and splits frequent, which is what index diagnostics want.
pub const DEFAULT_ORDER: usize = 3;

/// Smallest accepted branching factor.
///
/// Below order 3 an internal node could not hold the single separator
/// plus two children a split must produce, so the occupancy invariants
/// become unsatisfiable. [`BPlusTree::with_order`](crate::BPlusTree::with_order)
/// rejects anything smaller at construction time.
pub const MIN_ORDER: usize = 3;

/// Maximum payload entries a node may hold before a split is forced.
///
/// A node of order `n` has at most `n` children, hence `n - 1` routing
/// separators, and leaves are capped at the same length.
#[inline]
pub const fn max_entries(order: usize) -> usize {
    order - 1
}

/// Minimum payload entries a non-root node must retain.
///
/// This is `ceil(order / 2) - 1`. The ceiling form matters for even
/// orders: splitting a full internal node of order `n` leaves
/// `ceil(n / 2) - 1` separators in the right half, so any stricter
/// threshold would be violated by a legal split.
#[inline]
pub const fn min_entries(order: usize) -> usize {
    (order + 1) / 2 - 1
}

/// Minimum children a non-root internal node must retain.
///
/// Always `min_entries(order) + 1`: children and separators stay in
/// lockstep.
#[inline]
pub const fn min_children(order: usize) -> usize {
    (order + 1) / 2
}
