//! Common types and utilities shared across ordindex.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and occupancy thresholds
//! - Identifiers (CompositeKey, RecordId)

pub mod config;
mod key;
mod record_id;

pub use key::CompositeKey;
pub use record_id::RecordId;
