//! B+ tree index.
//!
//! Split across four files:
//! - `arena`: slot storage that owns the node graph
//! - `node`: leaf/internal payloads and chain links
//! - `tree`: the engine (insert, delete, search, scan, traversal)
//! - `iter`: the leaf-chain entry iterator

mod arena;
mod iter;
mod node;
mod tree;

pub use iter::Entries;
pub use node::Entry;
pub use tree::{BPlusTree, NodeSnapshot};
