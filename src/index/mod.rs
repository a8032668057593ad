//! Index structures.

pub mod btree;
mod shared;

pub use btree::{BPlusTree, Entries, Entry, NodeSnapshot};
pub use shared::SharedIndex;
