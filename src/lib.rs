//! # ordindex
//!
//! An in-memory B+ tree index engine over composite integer keys.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Callers                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────▼────────────┐     ┌────────────────────┐
//!          │       SharedIndex       │     │     CsvSource      │
//!          │  (RwLock around a tree) │     │ (key, rid) records │
//!          └────────────┬────────────┘     └─────────┬──────────┘
//!                       │        insert / bulk_load  │
//!          ┌────────────▼────────────────────────────▼──────────┐
//!          │                    BPlusTree                       │
//!          │  insert · delete · search · range_search · levels  │
//!          ├────────────────────────────────────────────────────┤
//!          │              NodeArena (owns all nodes)            │
//!          │   internal nodes: separators + children            │
//!          │   leaves: entries, doubly linked in key order      │
//!          └────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are [`CompositeKey`] pairs ordered lexicographically; each key maps
//! to one [`Entry`] holding every [`RecordId`] inserted under it. Internal
//! nodes route lookups by separator; all data lives in the leaves, which
//! form a doubly linked chain so range scans descend once and then walk
//! sideways.
//!
//! ## Quick start
//!
//! ```
//! use ordindex::{BPlusTree, CompositeKey, RecordId};
//!
//! let mut tree = BPlusTree::new();
//! tree.insert(CompositeKey::new(10, 5), RecordId::new(1));
//! tree.insert(CompositeKey::new(20, 6), RecordId::new(2));
//! tree.insert(CompositeKey::new(30, 7), RecordId::new(3));
//!
//! let hits = tree.range_search(CompositeKey::new(10, 0), CompositeKey::new(25, 0))?;
//! assert_eq!(hits.len(), 2);
//! # Ok::<(), ordindex::Error>(())
//! ```

pub mod common;
pub mod error;
pub mod index;
pub mod source;

pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{CompositeKey, RecordId};
pub use error::{Error, Result};
pub use index::{BPlusTree, Entries, Entry, NodeSnapshot, SharedIndex};
pub use source::CsvSource;
