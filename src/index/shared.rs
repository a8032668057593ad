//! Thread-safe wrapper around a tree.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::index::btree::BPlusTree;

/// A [`BPlusTree`] behind an `Arc<RwLock>`.
///
/// The tree itself assumes a single exclusive caller; concurrency is
/// layered on the outside. Readers share the lock, writers exclude
/// everyone, and clones of the handle refer to the same tree.
///
/// # Usage
/// ```
/// use ordindex::{CompositeKey, RecordId, SharedIndex};
///
/// let index = SharedIndex::new();
/// index.write().insert(CompositeKey::new(1, 1), RecordId::new(7));
/// assert!(index.read().search(CompositeKey::new(1, 1)).is_some());
/// ```
#[derive(Clone)]
pub struct SharedIndex {
    tree: Arc<RwLock<BPlusTree>>,
}

impl SharedIndex {
    /// Wrap a fresh default-order tree.
    pub fn new() -> Self {
        Self::from_tree(BPlusTree::new())
    }

    /// Wrap an existing tree (e.g. one built with a custom order).
    pub fn from_tree(tree: BPlusTree) -> Self {
        Self {
            tree: Arc::new(RwLock::new(tree)),
        }
    }

    /// Acquire shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, BPlusTree> {
        self.tree.read()
    }

    /// Acquire exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, BPlusTree> {
        self.tree.write()
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new()
    }
}
