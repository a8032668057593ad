//! Tree nodes - leaf entries, internal separators, and chain links.

use crate::common::{CompositeKey, RecordId};

use super::arena::NodeId;

/// One key's payload in a leaf: the key plus every record indexed under it.
///
/// Keys are unique within the tree; inserting a duplicate key appends its
/// record identifier here instead of creating a second entry, so `rids`
/// is never empty and preserves insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The indexed key.
    pub key: CompositeKey,
    /// Records stored under the key, oldest first.
    pub rids: Vec<RecordId>,
}

impl Entry {
    /// Create an entry holding a single record.
    pub fn new(key: CompositeKey, rid: RecordId) -> Self {
        Self {
            key,
            rids: vec![rid],
        }
    }
}

/// What a node stores, depending on its level.
///
/// Leaves hold the actual entries; internal nodes hold only routing
/// separators and child references. The two sequences of an internal
/// node stay synchronized: `children.len() == separators.len() + 1`
/// whenever the tree is at rest.
#[derive(Debug)]
pub(crate) enum NodePayload {
    Leaf {
        entries: Vec<Entry>,
    },
    Internal {
        separators: Vec<CompositeKey>,
        children: Vec<NodeId>,
    },
}

/// A node in the tree.
///
/// `parent`, `prev`, and `next` are back-references for traversal only;
/// the arena owns every node. `prev`/`next` are populated for leaves and
/// form the doubly linked chain that range scans walk.
#[derive(Debug)]
pub(crate) struct Node {
    pub payload: NodePayload,
    pub parent: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl Node {
    /// Create an unlinked leaf.
    pub fn leaf(entries: Vec<Entry>) -> Self {
        Self {
            payload: NodePayload::Leaf { entries },
            parent: None,
            prev: None,
            next: None,
        }
    }

    /// Create an unlinked internal node.
    pub fn internal(separators: Vec<CompositeKey>, children: Vec<NodeId>) -> Self {
        Self {
            payload: NodePayload::Internal {
                separators,
                children,
            },
            parent: None,
            prev: None,
            next: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.payload, NodePayload::Leaf { .. })
    }

    pub fn entries(&self) -> &[Entry] {
        match &self.payload {
            NodePayload::Leaf { entries } => entries,
            NodePayload::Internal { .. } => panic!("entries() on an internal node"),
        }
    }

    pub fn entries_mut(&mut self) -> &mut Vec<Entry> {
        match &mut self.payload {
            NodePayload::Leaf { entries } => entries,
            NodePayload::Internal { .. } => panic!("entries_mut() on an internal node"),
        }
    }

    pub fn separators(&self) -> &[CompositeKey] {
        match &self.payload {
            NodePayload::Internal { separators, .. } => separators,
            NodePayload::Leaf { .. } => panic!("separators() on a leaf"),
        }
    }

    pub fn separators_mut(&mut self) -> &mut Vec<CompositeKey> {
        match &mut self.payload {
            NodePayload::Internal { separators, .. } => separators,
            NodePayload::Leaf { .. } => panic!("separators_mut() on a leaf"),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.payload {
            NodePayload::Internal { children, .. } => children,
            NodePayload::Leaf { .. } => panic!("children() on a leaf"),
        }
    }

    pub fn children_mut(&mut self) -> &mut Vec<NodeId> {
        match &mut self.payload {
            NodePayload::Internal { children, .. } => children,
            NodePayload::Leaf { .. } => panic!("children_mut() on a leaf"),
        }
    }

    /// Insert an entry at its sorted position, coalescing a duplicate key
    /// into the existing entry's record list.
    ///
    /// No size check: overflow handling is the tree engine's job.
    pub fn insert_entry(&mut self, new: Entry) {
        let entries = self.entries_mut();
        for i in 0..entries.len() {
            if entries[i].key == new.key {
                entries[i].rids.extend(new.rids);
                return;
            }
            if entries[i].key > new.key {
                entries.insert(i, new);
                return;
            }
        }
        entries.push(new);
    }

    /// Insert a separator at its sorted position.
    pub fn insert_separator(&mut self, key: CompositeKey) {
        let separators = self.separators_mut();
        let pos = separators
            .iter()
            .position(|s| *s > key)
            .unwrap_or(separators.len());
        separators.insert(pos, key);
    }
}
