//! Composite key type.

use std::fmt;

/// A two-component index key, ordered lexicographically.
///
/// The first component is compared first; the second component breaks
/// ties. Deriving `Ord` on a tuple struct yields exactly this order, so
/// the comparator every tree operation relies on is the derived one.
///
/// The comparator must be a total order (antisymmetric, transitive) or
/// the tree's separator invariants silently break; the derived integer
/// comparison guarantees this.
///
/// # Example
/// ```
/// use ordindex::CompositeKey;
///
/// let a = CompositeKey::new(1, 9);
/// let b = CompositeKey::new(2, 0);
/// assert!(a < b); // first component wins
/// assert!(CompositeKey::new(2, 1) < CompositeKey::new(2, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(pub i64, pub i64);

impl CompositeKey {
    /// Create a new key from its two components.
    #[inline]
    pub fn new(first: i64, second: i64) -> Self {
        CompositeKey(first, second)
    }
}

impl From<(i64, i64)> for CompositeKey {
    fn from((first, second): (i64, i64)) -> Self {
        CompositeKey(first, second)
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_key_lexicographic_order() {
        // First component dominates
        assert!(CompositeKey::new(1, 100) < CompositeKey::new(2, 0));
        assert!(CompositeKey::new(3, -5) > CompositeKey::new(2, 99));

        // Second component breaks ties
        assert!(CompositeKey::new(2, 1) < CompositeKey::new(2, 5));
        assert!(CompositeKey::new(2, 7) > CompositeKey::new(2, 5));
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(CompositeKey::new(4, 4), CompositeKey::new(4, 4));
        assert_eq!(
            CompositeKey::new(4, 4).cmp(&CompositeKey::new(4, 4)),
            Ordering::Equal
        );
        assert_ne!(CompositeKey::new(4, 4), CompositeKey::new(4, 5));
    }

    #[test]
    fn test_key_comparator_consistency() {
        // Antisymmetry and transitivity over a small sample
        let keys = [
            CompositeKey::new(-1, 0),
            CompositeKey::new(0, 0),
            CompositeKey::new(0, 1),
            CompositeKey::new(1, -1),
        ];
        for a in keys {
            for b in keys {
                assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
                for c in keys {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_key_from_tuple() {
        let key: CompositeKey = (7, 8).into();
        assert_eq!(key, CompositeKey::new(7, 8));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", CompositeKey::new(12, -3)), "(12, -3)");
    }
}
