//! Record identifier type.

use std::fmt;

/// Identifies a record in the backing store.
///
/// The index maps each [`CompositeKey`](crate::CompositeKey) to one or
/// more of these. The index never interprets the value; it is an opaque
/// handle the surrounding system resolves back to a full record.
///
/// # Example
/// ```
/// use ordindex::RecordId;
///
/// let rid = RecordId::new(42);
/// assert_eq!(rid.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Create a new RecordId.
    #[inline]
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_new() {
        let rid = RecordId::new(7);
        assert_eq!(rid.0, 7);
        assert_eq!(RecordId::new(7), rid);
        assert_ne!(RecordId::new(8), rid);
    }

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId::new(1) < RecordId::new(2));
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(format!("{}", RecordId::new(42)), "Record(42)");
    }
}
