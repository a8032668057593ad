//! The B+ tree engine.
//!
//! [`BPlusTree`] owns the node graph through a [`NodeArena`] and exposes
//! insert, delete, point search, range scan, and a level-order traversal
//! for diagnostics. Splits propagate upward on insert; borrows and merges
//! propagate upward on delete, collapsing the root when it runs out of
//! children.

use std::cmp::Ordering;
use std::mem;

use crate::common::config::{self, DEFAULT_ORDER, MIN_ORDER};
use crate::common::{CompositeKey, RecordId};
use crate::error::{Error, Result};

use super::arena::{NodeArena, NodeId};
use super::iter::Entries;
use super::node::{Entry, Node, NodePayload};

/// One node's payload as seen by [`BPlusTree::levels`].
///
/// A diagnostic snapshot: separators for internal nodes, entries for
/// leaves, in left-to-right order within each level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSnapshot {
    Internal { separators: Vec<CompositeKey> },
    Leaf { entries: Vec<Entry> },
}

/// Where a split's caller must attach its two new children.
///
/// `insert_separator_at` resolves the attach decision for the level below:
/// either both new siblings land under the same node (no split at this
/// level, or the routed key fell strictly to one side of the promoted
/// separator), or the promoted separator *is* the routed key and the
/// siblings straddle it.
#[derive(Debug, Clone, Copy)]
enum AttachPlan {
    Both(NodeId),
    Split { less: NodeId, greater: NodeId },
}

impl AttachPlan {
    /// The targets for the caller's (left, right) children.
    fn targets(self) -> (NodeId, NodeId) {
        match self {
            AttachPlan::Both(node) => (node, node),
            AttachPlan::Split { less, greater } => (less, greater),
        }
    }
}

/// An in-memory B+ tree index over [`CompositeKey`]s.
///
/// # Structure
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                        BPlusTree                         │
/// │   root ──▶ [ separators ]          internal levels       │
/// │             /         \                                  │
/// │      [ entries ] ⇄ [ entries ]     leaf chain (prev/next)│
/// └──────────────────────────────────────────────────────────┘
/// ```
/// Leaves hold the entries; internal nodes route by separator. All
/// leaves sit on a doubly linked chain in key order, so a range scan
/// descends once and then walks sideways.
///
/// # Concurrency
/// Single exclusive caller per tree. Wrap it in
/// [`SharedIndex`](crate::SharedIndex) if a surrounding system needs to
/// share it across threads.
///
/// # Usage
/// ```
/// use ordindex::{BPlusTree, CompositeKey, RecordId};
///
/// let mut tree = BPlusTree::new();
/// tree.insert(CompositeKey::new(1, 5), RecordId::new(100));
/// tree.insert(CompositeKey::new(1, 5), RecordId::new(101));
///
/// let entry = tree.search(CompositeKey::new(1, 5)).unwrap();
/// assert_eq!(entry.rids.len(), 2);
/// ```
pub struct BPlusTree {
    /// Owns every node; graph edges are NodeId lookups.
    arena: NodeArena,

    /// The single node with no parent. A leaf while the tree is small.
    root: NodeId,

    /// Branching factor (immutable after construction).
    order: usize,
}

impl BPlusTree {
    /// Create a tree with the default branching factor (3).
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::leaf(Vec::new()));
        Self {
            arena,
            root,
            order: DEFAULT_ORDER,
        }
    }

    /// Create a tree with an explicit branching factor.
    ///
    /// # Errors
    /// `Error::InvalidOrder` if `order < 3`; the occupancy invariants are
    /// unsatisfiable below that.
    pub fn with_order(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder(order));
        }
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::leaf(Vec::new()));
        Ok(Self { arena, root, order })
    }

    /// The configured branching factor.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct keys, by walking the leaf chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of live nodes in the arena.
    ///
    /// An empty tree has exactly one (the root leaf); useful for leak
    /// checks after heavy delete workloads.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    // ========================================================================
    // Public API: lookups
    // ========================================================================

    /// Point lookup.
    ///
    /// Never mutates; repeated calls between mutations return the same
    /// result.
    pub fn search(&self, key: CompositeKey) -> Option<&Entry> {
        let leaf = self.find_leaf(key);
        self.arena
            .node(leaf)
            .entries()
            .iter()
            .find(|entry| entry.key == key)
    }

    /// Inclusive range scan in ascending key order.
    ///
    /// Descends once to the leaf containing (or adjacent to) `start`,
    /// then walks the leaf chain until a key passes `end`. An empty
    /// result is not an error.
    ///
    /// # Errors
    /// `Error::InvalidRange` if `start > end`.
    pub fn range_search(&self, start: CompositeKey, end: CompositeKey) -> Result<Vec<Entry>> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        let mut result = Vec::new();
        let mut cursor = Some(self.find_leaf(start));
        while let Some(id) = cursor {
            let node = self.arena.node(id);
            for entry in node.entries() {
                if entry.key > end {
                    return Ok(result);
                }
                if entry.key >= start {
                    result.push(entry.clone());
                }
            }
            cursor = node.next;
        }
        Ok(result)
    }

    /// Iterate every entry in ascending key order via the leaf chain.
    pub fn iter(&self) -> Entries<'_> {
        Entries::new(self, self.leftmost_leaf())
    }

    /// Level-order traversal of node payloads, root level first.
    ///
    /// Diagnostic interface: the surrounding system renders it however it
    /// likes; tests assert tree shape through it.
    pub fn levels(&self) -> Vec<Vec<NodeSnapshot>> {
        let mut levels = Vec::new();
        let mut current = vec![self.root];
        while !current.is_empty() {
            let mut snapshots = Vec::with_capacity(current.len());
            let mut next_level = Vec::new();
            for id in current {
                match &self.arena.node(id).payload {
                    NodePayload::Internal {
                        separators,
                        children,
                    } => {
                        snapshots.push(NodeSnapshot::Internal {
                            separators: separators.clone(),
                        });
                        next_level.extend(children.iter().copied());
                    }
                    NodePayload::Leaf { entries } => {
                        snapshots.push(NodeSnapshot::Leaf {
                            entries: entries.clone(),
                        });
                    }
                }
            }
            levels.push(snapshots);
            current = next_level;
        }
        levels
    }

    // ========================================================================
    // Public API: mutation
    // ========================================================================

    /// Index `rid` under `key`.
    ///
    /// Returns `true` if a new entry was created, `false` if the key
    /// already existed and the identifier was appended to it (duplicate
    /// keys coalesce; no structural change).
    pub fn insert(&mut self, key: CompositeKey, rid: RecordId) -> bool {
        let order = self.order;
        let leaf_id = self.find_leaf(key);

        {
            let entries = self.arena.node_mut(leaf_id).entries_mut();
            if let Some(entry) = entries.iter_mut().find(|e| e.key == key) {
                entry.rids.push(rid);
                return false;
            }
            if entries.len() < config::max_entries(order) {
                let pos = entries
                    .iter()
                    .position(|e| e.key > key)
                    .unwrap_or(entries.len());
                entries.insert(pos, Entry::new(key, rid));
                return true;
            }
        }

        // Overflow: insert into the now over-full leaf, then split.
        self.arena
            .node_mut(leaf_id)
            .insert_entry(Entry::new(key, rid));
        self.split_leaf(leaf_id);
        true
    }

    /// Remove `rid` from `key`'s entry, or the whole entry.
    ///
    /// With `Some(rid)`: if the entry holds several identifiers only that
    /// one is removed; if it holds just that one, the entry goes away and
    /// the leaf rebalances. With `None`: the whole entry goes away.
    ///
    /// # Errors
    /// - `Error::KeyNotFound` if `key` is not indexed.
    /// - `Error::RecordNotFound` if `rid` was given but is not indexed
    ///   under `key`.
    ///
    /// Either error is raised before anything is touched.
    pub fn delete(&mut self, key: CompositeKey, rid: Option<RecordId>) -> Result<()> {
        let leaf_id = self.find_leaf(key);
        let idx = self
            .arena
            .node(leaf_id)
            .entries()
            .iter()
            .position(|e| e.key == key)
            .ok_or(Error::KeyNotFound(key))?;

        if let Some(rid) = rid {
            let entry = &self.arena.node(leaf_id).entries()[idx];
            if !entry.rids.contains(&rid) {
                return Err(Error::RecordNotFound { key, rid });
            }
            if entry.rids.len() > 1 {
                let rids = &mut self.arena.node_mut(leaf_id).entries_mut()[idx].rids;
                let pos = rids
                    .iter()
                    .position(|r| *r == rid)
                    .expect("membership checked above");
                rids.remove(pos);
                return Ok(());
            }
        }

        self.remove_entry(leaf_id, idx);
        Ok(())
    }

    /// Reset to an empty tree, discarding every node.
    pub fn clear(&mut self) {
        self.arena = NodeArena::new();
        self.root = self.arena.alloc(Node::leaf(Vec::new()));
    }

    /// Reset the tree and insert a batch of pairs.
    pub fn bulk_load<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (CompositeKey, RecordId)>,
    {
        self.clear();
        for (key, rid) in pairs {
            self.insert(key, rid);
        }
    }

    // ========================================================================
    // Descent
    // ========================================================================

    /// Root-to-leaf descent for `key`.
    ///
    /// At each internal node, the first separator strictly greater than
    /// `key` routes left into the child at its index; if no separator
    /// exceeds `key`, descent falls through to the last child. The
    /// asymmetry matches the separator invariant: keys under `child[i]`
    /// are `< separator[i]`, keys under the last child are `>=` the last
    /// separator.
    fn find_leaf(&self, key: CompositeKey) -> NodeId {
        let mut id = self.root;
        loop {
            match &self.arena.node(id).payload {
                NodePayload::Leaf { .. } => return id,
                NodePayload::Internal {
                    separators,
                    children,
                } => {
                    let pos = separators
                        .iter()
                        .position(|s| key < *s)
                        .unwrap_or(separators.len());
                    id = children[pos];
                }
            }
        }
    }

    /// The leaf holding the smallest keys (head of the leaf chain).
    fn leftmost_leaf(&self) -> NodeId {
        let mut id = self.root;
        loop {
            match &self.arena.node(id).payload {
                NodePayload::Leaf { .. } => return id,
                NodePayload::Internal { children, .. } => id = children[0],
            }
        }
    }

    /// The key that positions a node among its siblings: first entry key
    /// for a leaf, first separator for an internal node.
    fn routing_key(&self, id: NodeId) -> CompositeKey {
        let node = self.arena.node(id);
        match &node.payload {
            NodePayload::Leaf { entries } => entries[0].key,
            NodePayload::Internal { separators, .. } => separators[0],
        }
    }

    /// Wire `child` under `parent` at its sorted position and set its
    /// parent back-reference.
    fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        let key = self.routing_key(child);
        self.arena.node_mut(child).parent = Some(parent);

        let siblings = self.arena.node(parent).children().to_vec();
        let pos = siblings
            .iter()
            .position(|&c| key < self.routing_key(c))
            .unwrap_or(siblings.len());
        self.arena.node_mut(parent).children_mut().insert(pos, child);
    }

    /// Remove `child` from `parent`'s child list (separators untouched).
    fn detach_child(&mut self, parent: NodeId, child: NodeId) {
        let children = self.arena.node_mut(parent).children_mut();
        let pos = children
            .iter()
            .position(|&c| c == child)
            .expect("child is not attached to this parent");
        children.remove(pos);
    }

    /// Index of `child` within `parent`'s child list.
    fn child_index(&self, parent: NodeId, child: NodeId) -> usize {
        self.arena
            .node(parent)
            .children()
            .iter()
            .position(|&c| c == child)
            .expect("child is not attached to this parent")
    }

    /// Drop a leaf out of the doubly linked chain.
    fn unlink_leaf(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = self.arena.node(id);
            (node.prev, node.next)
        };
        if let Some(prev) = prev {
            self.arena.node_mut(prev).next = next;
        }
        if let Some(next) = next {
            self.arena.node_mut(next).prev = prev;
        }
    }

    // ========================================================================
    // Insert rebalancing (splits)
    // ========================================================================

    /// Split an over-full leaf (holding `order` entries) into two,
    /// splice them into the leaf chain in place of the original, and
    /// promote the right half's first key upward.
    fn split_leaf(&mut self, leaf_id: NodeId) {
        let median = self.order / 2;
        let (mut entries, parent, prev, next) = {
            let node = self.arena.node_mut(leaf_id);
            (mem::take(node.entries_mut()), node.parent, node.prev, node.next)
        };
        debug_assert_eq!(entries.len(), self.order);

        let right_entries = entries.split_off(median);
        let promoted = right_entries[0].key;

        let left_id = self.arena.alloc(Node::leaf(entries));
        let right_id = self.arena.alloc(Node::leaf(right_entries));

        // Splice the pair into the chain where the original leaf sat.
        {
            let left = self.arena.node_mut(left_id);
            left.prev = prev;
            left.next = Some(right_id);
        }
        {
            let right = self.arena.node_mut(right_id);
            right.prev = Some(left_id);
            right.next = next;
        }
        if let Some(prev) = prev {
            self.arena.node_mut(prev).next = Some(left_id);
        }
        if let Some(next) = next {
            self.arena.node_mut(next).prev = Some(right_id);
        }

        match parent {
            None => {
                // The leaf was the root: grow the tree by one level.
                self.arena.free(leaf_id);
                let root_id = self.arena.alloc(Node::internal(vec![promoted], Vec::new()));
                self.attach_child(root_id, right_id);
                self.attach_child(root_id, left_id);
                self.root = root_id;
            }
            Some(parent_id) => {
                self.detach_child(parent_id, leaf_id);
                self.arena.free(leaf_id);
                let (less, greater) = self.insert_separator_at(parent_id, promoted).targets();
                self.attach_child(less, left_id);
                self.attach_child(greater, right_id);
            }
        }
    }

    /// Insert a promoted separator into an internal node, splitting and
    /// recursing upward as needed.
    ///
    /// The returned [`AttachPlan`] tells the caller where its two new
    /// children belong relative to `key`: the whole multi-level cascade
    /// is resolved by this one recursive pass.
    fn insert_separator_at(&mut self, node_id: NodeId, key: CompositeKey) -> AttachPlan {
        let order = self.order;
        {
            let node = self.arena.node_mut(node_id);
            node.insert_separator(key);
            if node.separators().len() <= config::max_entries(order) {
                return AttachPlan::Both(node_id);
            }
        }

        // Overflow: split around the median separator.
        let median = order / 2;
        let (mut separators, children, parent) = {
            let node = self.arena.node_mut(node_id);
            (
                mem::take(node.separators_mut()),
                mem::take(node.children_mut()),
                node.parent,
            )
        };
        let mut right_separators = separators.split_off(median);
        let promoted = right_separators.remove(0);

        let left_id = self
            .arena
            .alloc(Node::internal(separators, Vec::new()));
        let right_id = self
            .arena
            .alloc(Node::internal(right_separators, Vec::new()));

        // Children strictly below the promoted separator go left, the
        // rest go right; sorted attach keeps both sides ordered.
        for child in children {
            if self.routing_key(child) < promoted {
                self.attach_child(left_id, child);
            } else {
                self.attach_child(right_id, child);
            }
        }

        match parent {
            None => {
                self.arena.free(node_id);
                let root_id = self.arena.alloc(Node::internal(vec![promoted], Vec::new()));
                self.attach_child(root_id, left_id);
                self.attach_child(root_id, right_id);
                self.root = root_id;
            }
            Some(parent_id) => {
                self.detach_child(parent_id, node_id);
                self.arena.free(node_id);
                let (less, greater) = self.insert_separator_at(parent_id, promoted).targets();
                self.attach_child(less, left_id);
                self.attach_child(greater, right_id);
            }
        }

        match promoted.cmp(&key) {
            Ordering::Greater => AttachPlan::Both(left_id),
            Ordering::Less => AttachPlan::Both(right_id),
            Ordering::Equal => AttachPlan::Split {
                less: left_id,
                greater: right_id,
            },
        }
    }

    // ========================================================================
    // Delete rebalancing (borrows and merges)
    // ========================================================================

    /// Remove the entry at `idx` from a leaf and restore the occupancy
    /// invariant: borrow from an adjacent same-parent sibling first,
    /// merge into one only when neither has surplus.
    fn remove_entry(&mut self, leaf_id: NodeId, idx: usize) {
        self.arena.node_mut(leaf_id).entries_mut().remove(idx);

        // The root leaf may hold anything from zero entries up.
        if leaf_id == self.root {
            return;
        }
        if self.arena.node(leaf_id).entries().len() >= config::min_entries(self.order) {
            return;
        }
        if self.try_borrow_entry(leaf_id) {
            return;
        }
        self.merge_leaf(leaf_id);
    }

    /// Rotate one boundary entry from an adjacent sibling that shares
    /// this leaf's parent, updating the separator between them. Returns
    /// false when neither neighbor has an entry to spare.
    fn try_borrow_entry(&mut self, leaf_id: NodeId) -> bool {
        let min = config::min_entries(self.order);
        let (parent_id, prev, next) = {
            let node = self.arena.node(leaf_id);
            (
                node.parent.expect("non-root leaf has a parent"),
                node.prev,
                node.next,
            )
        };

        if let Some(next_id) = next {
            if self.arena.node(next_id).parent == Some(parent_id)
                && self.arena.node(next_id).entries().len() > min
            {
                // Sibling's first entry becomes this leaf's last; the
                // separator moves up to the sibling's new first key.
                let moved = self.arena.node_mut(next_id).entries_mut().remove(0);
                self.arena.node_mut(leaf_id).entries_mut().push(moved);
                let boundary = self.arena.node(next_id).entries()[0].key;
                let i = self.child_index(parent_id, leaf_id);
                self.arena.node_mut(parent_id).separators_mut()[i] = boundary;
                return true;
            }
        }

        if let Some(prev_id) = prev {
            if self.arena.node(prev_id).parent == Some(parent_id)
                && self.arena.node(prev_id).entries().len() > min
            {
                // Sibling's last entry becomes this leaf's first; its key
                // is the new separator between the two.
                let moved = self
                    .arena
                    .node_mut(prev_id)
                    .entries_mut()
                    .pop()
                    .expect("sibling has entries to spare");
                let boundary = moved.key;
                self.arena.node_mut(leaf_id).entries_mut().insert(0, moved);
                let i = self.child_index(parent_id, leaf_id);
                self.arena.node_mut(parent_id).separators_mut()[i - 1] = boundary;
                return true;
            }
        }

        false
    }

    /// Fold an underfull leaf into an adjacent same-parent sibling, drop
    /// the separator that routed to it, unlink it from the chain, and
    /// rebalance the parent.
    fn merge_leaf(&mut self, leaf_id: NodeId) {
        let parent_id = self
            .arena
            .node(leaf_id)
            .parent
            .expect("non-root leaf has a parent");
        let i = self.child_index(parent_id, leaf_id);
        let child_count = self.arena.node(parent_id).children().len();
        let remaining = mem::take(self.arena.node_mut(leaf_id).entries_mut());

        if i + 1 < child_count {
            // Remaining entries all precede the right sibling's.
            let sibling = self.arena.node(parent_id).children()[i + 1];
            self.arena
                .node_mut(sibling)
                .entries_mut()
                .splice(0..0, remaining);
            let parent = self.arena.node_mut(parent_id);
            parent.separators_mut().remove(i);
            parent.children_mut().remove(i);
        } else {
            let sibling = self.arena.node(parent_id).children()[i - 1];
            self.arena.node_mut(sibling).entries_mut().extend(remaining);
            let parent = self.arena.node_mut(parent_id);
            parent.separators_mut().remove(i - 1);
            parent.children_mut().remove(i);
        }

        self.unlink_leaf(leaf_id);
        self.arena.free(leaf_id);
        self.rebalance_internal(parent_id);
    }

    /// Restore the child-count invariant of an internal node that just
    /// lost a child: borrow a child across the parent boundary if an
    /// adjacent sibling has surplus, otherwise merge with one and recurse
    /// into the parent. A root left with a single child collapses onto it.
    fn rebalance_internal(&mut self, node_id: NodeId) {
        if node_id == self.root {
            let collapse = {
                let node = self.arena.node(node_id);
                !node.is_leaf() && node.children().len() == 1
            };
            if collapse {
                let child = self.arena.node(node_id).children()[0];
                self.arena.node_mut(child).parent = None;
                self.arena.free(node_id);
                self.root = child;
            }
            return;
        }

        let min_children = config::min_children(self.order);
        if self.arena.node(node_id).children().len() >= min_children {
            return;
        }

        let parent_id = self
            .arena
            .node(node_id)
            .parent
            .expect("non-root node has a parent");
        let i = self.child_index(parent_id, node_id);
        let sibling_count = self.arena.node(parent_id).children().len();

        // Borrow a child from the right sibling: rotate the boundary
        // separator down into this node and the sibling's first separator
        // up into the parent.
        if i + 1 < sibling_count {
            let right_id = self.arena.node(parent_id).children()[i + 1];
            if self.arena.node(right_id).children().len() > min_children {
                let moved_child = self.arena.node_mut(right_id).children_mut().remove(0);
                let moved_sep = self.arena.node_mut(right_id).separators_mut().remove(0);
                let boundary = mem::replace(
                    &mut self.arena.node_mut(parent_id).separators_mut()[i],
                    moved_sep,
                );
                let node = self.arena.node_mut(node_id);
                node.separators_mut().push(boundary);
                node.children_mut().push(moved_child);
                self.arena.node_mut(moved_child).parent = Some(node_id);
                return;
            }
        }

        // Borrow from the left sibling (mirror image).
        if i > 0 {
            let left_id = self.arena.node(parent_id).children()[i - 1];
            if self.arena.node(left_id).children().len() > min_children {
                let moved_child = self
                    .arena
                    .node_mut(left_id)
                    .children_mut()
                    .pop()
                    .expect("sibling has children to spare");
                let moved_sep = self
                    .arena
                    .node_mut(left_id)
                    .separators_mut()
                    .pop()
                    .expect("sibling has separators to spare");
                let boundary = mem::replace(
                    &mut self.arena.node_mut(parent_id).separators_mut()[i - 1],
                    moved_sep,
                );
                let node = self.arena.node_mut(node_id);
                node.separators_mut().insert(0, boundary);
                node.children_mut().insert(0, moved_child);
                self.arena.node_mut(moved_child).parent = Some(node_id);
                return;
            }
        }

        // No sibling has surplus: merge across the boundary, folding the
        // parent separator between the pair into the merged node.
        if i + 1 < sibling_count {
            let right_id = self.arena.node(parent_id).children()[i + 1];
            let folded = {
                let parent = self.arena.node_mut(parent_id);
                parent.children_mut().remove(i + 1);
                parent.separators_mut().remove(i)
            };
            let (mut seps, kids) = {
                let right = self.arena.node_mut(right_id);
                (mem::take(right.separators_mut()), mem::take(right.children_mut()))
            };
            self.arena.free(right_id);
            {
                let node = self.arena.node_mut(node_id);
                node.separators_mut().push(folded);
                node.separators_mut().append(&mut seps);
                node.children_mut().extend(kids.iter().copied());
            }
            for kid in kids {
                self.arena.node_mut(kid).parent = Some(node_id);
            }
        } else {
            let left_id = self.arena.node(parent_id).children()[i - 1];
            let folded = {
                let parent = self.arena.node_mut(parent_id);
                parent.children_mut().remove(i);
                parent.separators_mut().remove(i - 1)
            };
            let (mut seps, kids) = {
                let node = self.arena.node_mut(node_id);
                (mem::take(node.separators_mut()), mem::take(node.children_mut()))
            };
            self.arena.free(node_id);
            {
                let left = self.arena.node_mut(left_id);
                left.separators_mut().push(folded);
                left.separators_mut().append(&mut seps);
                left.children_mut().extend(kids.iter().copied());
            }
            for kid in kids {
                self.arena.node_mut(kid).parent = Some(left_id);
            }
        }

        self.rebalance_internal(parent_id);
    }

    // Internal accessors for the leaf-chain iterator.
    pub(super) fn chain_entries(&self, id: NodeId) -> &[Entry] {
        self.arena.node(id).entries()
    }

    pub(super) fn chain_next(&self, id: NodeId) -> Option<NodeId> {
        self.arena.node(id).next
    }
}

impl Default for BPlusTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
