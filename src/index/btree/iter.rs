//! Leaf-chain iteration.

use super::arena::NodeId;
use super::node::Entry;
use super::tree::BPlusTree;

/// Iterator over every entry in ascending key order.
///
/// Walks the doubly linked leaf chain left to right, yielding each leaf's
/// entries in place. Created by [`BPlusTree::iter`].
pub struct Entries<'a> {
    tree: &'a BPlusTree,
    leaf: Option<NodeId>,
    idx: usize,
}

impl<'a> Entries<'a> {
    pub(super) fn new(tree: &'a BPlusTree, leftmost: NodeId) -> Self {
        Self {
            tree,
            leaf: Some(leftmost),
            idx: 0,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.leaf?;
            let entries = self.tree.chain_entries(leaf);
            if let Some(entry) = entries.get(self.idx) {
                self.idx += 1;
                return Some(entry);
            }
            // Leaf exhausted (or empty root leaf); step along the chain.
            self.leaf = self.tree.chain_next(leaf);
            self.idx = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{CompositeKey, RecordId};
    use crate::index::btree::BPlusTree;

    #[test]
    fn test_iter_empty_tree() {
        let tree = BPlusTree::new();
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_iter_yields_every_key_in_order() {
        let mut tree = BPlusTree::new();
        for i in (0..25).rev() {
            tree.insert(CompositeKey::new(i, 0), RecordId::new(i as u64));
        }

        let keys: Vec<_> = tree.iter().map(|e| e.key).collect();
        let expected: Vec<_> = (0..25).map(|i| CompositeKey::new(i, 0)).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_iter_crosses_leaf_boundaries() {
        // Enough inserts for several leaves at order 3
        let mut tree = BPlusTree::new();
        for i in 0..12 {
            tree.insert(CompositeKey::new(i, i), RecordId::new(i as u64));
        }
        assert!(tree.levels().len() > 1);
        assert_eq!(tree.iter().count(), 12);
    }
}
