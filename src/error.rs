//! Error types for ordindex.

use thiserror::Error;

use crate::common::{CompositeKey, RecordId};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in ordindex.
///
/// Every error is detected at lookup/validation time, before any node is
/// mutated, so a returned error always leaves the tree exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a record source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested key is not in the index.
    #[error("key {0} is not in the index")]
    KeyNotFound(CompositeKey),

    /// The key exists but does not map to the requested record.
    #[error("{rid} is not indexed under key {key}")]
    RecordNotFound {
        key: CompositeKey,
        rid: RecordId,
    },

    /// Range scan called with a start key past the end key.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        start: CompositeKey,
        end: CompositeKey,
    },

    /// Requested branching factor is too small for the tree invariants.
    #[error("order must be at least 3, got {0}")]
    InvalidOrder(usize),

    /// A named column is absent from the record source's header row.
    #[error("column '{0}' is missing from the header row")]
    MissingColumn(String),

    /// A record number outside the record source's row range.
    #[error("record {0} is out of range")]
    RecordOutOfRange(usize),

    /// A record row that cannot be parsed into a key and identifier.
    #[error("record {0} is malformed")]
    MalformedRecord(usize),
}
