// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! First-occurrence index lookup.
//!
//! An [`IndexLookup`] maps each value seen during a single forward scan to the
//! earliest index at which it appeared. It is the building block of the
//! hash-based pair and triplet resolvers.
//!
//! A lookup is scoped to one scan: resolvers construct a fresh instance per
//! call (or per fixed index, for triplets) and drop it on return. Values are
//! only ever added, never removed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Value → first-seen index mapping, built incrementally during a scan.
#[derive(Debug, Default, Clone)]
pub struct IndexLookup {
    first_seen: HashMap<i64, usize>,
}

impl IndexLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lookup sized for a scan over `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first_seen: HashMap::with_capacity(capacity),
        }
    }

    /// Record that `value` was seen at `index`.
    ///
    /// The first occurrence wins: if `value` is already present, the existing
    /// index is kept. Returns true if the value was newly recorded.
    pub fn observe(&mut self, value: i64, index: usize) -> bool {
        match self.first_seen.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Earliest index at which `value` was observed, if any.
    pub fn lookup(&self, value: i64) -> Option<usize> {
        self.first_seen.get(&value).copied()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.first_seen.contains_key(&value)
    }

    /// Number of distinct values observed.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_new() {
        let lookup = IndexLookup::new();
        assert!(lookup.is_empty());
        assert_eq!(lookup.len(), 0);
        assert_eq!(lookup.lookup(0), None);
    }

    #[test]
    fn test_observe_then_lookup() {
        let mut lookup = IndexLookup::with_capacity(4);
        assert!(lookup.observe(7, 0));
        assert!(lookup.observe(-3, 1));

        assert_eq!(lookup.lookup(7), Some(0));
        assert_eq!(lookup.lookup(-3), Some(1));
        assert_eq!(lookup.lookup(5), None);
        assert!(lookup.contains(-3));
        assert!(!lookup.contains(5));
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut lookup = IndexLookup::new();
        assert!(lookup.observe(3, 0));
        assert!(!lookup.observe(3, 4));
        assert!(!lookup.observe(3, 9));

        assert_eq!(lookup.lookup(3), Some(0));
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_extreme_values() {
        let mut lookup = IndexLookup::new();
        lookup.observe(i64::MIN, 2);
        lookup.observe(i64::MAX, 5);

        assert_eq!(lookup.lookup(i64::MIN), Some(2));
        assert_eq!(lookup.lookup(i64::MAX), Some(5));
    }
}
