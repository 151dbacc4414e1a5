//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// Represents a single cache entry: the stored value plus the handle of the
/// entry's slot in the recency order.
///
/// The slot handle is bookkeeping owned by the store; it is meaningless
/// outside the cache that issued it.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Slot handle in the recency list
    pub slot: usize,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry bound to a recency slot.
    pub fn new(value: V, slot: usize) -> Self {
        Self { value, slot }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 7);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.slot, 7);
    }
}
