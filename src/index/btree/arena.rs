//! Node arena - slot storage for the tree's node graph.
//!
//! Parent, sibling, and leaf-chain references form cycles, so nodes are
//! not owned by one another. Instead the arena owns every node and the
//! graph edges are [`NodeId`] lookups. Freed slots go on a free list and
//! are reused by later splits.

use std::fmt;

use super::node::Node;

/// Identifies a node slot in the arena.
///
/// Using `usize` because slots live in a `Vec` and the id indexes it
/// directly (`slots[id.0]`) - no casting, no pointer juggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Owns every node reachable from the tree's root.
///
/// A slot holds `Some(Node)` while the node is linked into the tree and
/// `None` after it has been unlinked and freed. Accessing a freed slot is
/// a bug in the rebalancing logic, so the accessors assert rather than
/// return `Option`.
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free_list: Vec<NodeId>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store a node, reusing a freed slot when one is available.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none(), "free list holds a live slot");
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release an unlinked node's slot for reuse.
    ///
    /// The caller must already have detached the node from its parent and
    /// from the leaf chain; the arena only reclaims storage.
    pub fn free(&mut self, id: NodeId) {
        let slot = &mut self.slots[id.0];
        assert!(slot.is_some(), "double free of {id}");
        *slot = None;
        self.free_list.push(id);
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("accessed a freed node")
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("accessed a freed node")
    }

    /// Number of live (allocated, not freed) nodes.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc_and_access() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(Node::leaf(Vec::new()));

        assert!(arena.node(id).is_leaf());
        assert_eq!(arena.live(), 1);

        arena.node_mut(id).entries_mut();
    }

    #[test]
    fn test_arena_free_and_reuse() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::leaf(Vec::new()));
        let b = arena.alloc(Node::leaf(Vec::new()));
        assert_ne!(a, b);
        assert_eq!(arena.live(), 2);

        arena.free(a);
        assert_eq!(arena.live(), 1);

        // Freed slot is recycled before the vector grows
        let c = arena.alloc(Node::leaf(Vec::new()));
        assert_eq!(c, a);
        assert_eq!(arena.live(), 2);
    }

    #[test]
    #[should_panic(expected = "accessed a freed node")]
    fn test_arena_stale_access_panics() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(Node::leaf(Vec::new()));
        arena.free(id);
        arena.node(id);
    }

    #[test]
    #[should_panic(expected = "double free")]
    fn test_arena_double_free_panics() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(Node::leaf(Vec::new()));
        arena.free(id);
        arena.free(id);
    }
}
