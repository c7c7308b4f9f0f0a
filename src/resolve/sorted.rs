// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sort-then-two-pointer strategy.
//!
//! Sorts a permutation of the indices by value (the input is never mutated)
//! and walks two pointers inward: a sum below the target advances the low
//! pointer, a sum above retreats the high one. Pairs cost O(n log n),
//! triplets O(n²) with no hashing at all.
//!
//! The sort is stable, so equal values keep their scan order. Indices are
//! mapped back to original positions and returned ascending.

use std::cmp::Ordering;

use log::debug;

use super::{Pair, Triplet};
use crate::statistics::{Counter, ScanStatistics};

/// Indices of `sequence` ordered by value.
fn sorted_order(sequence: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sequence.len()).collect();
    order.sort_by_key(|&index| sequence[index]);
    order
}

/// Two-pointer search over `order[low..=high]` for a pair summing to `target`.
///
/// Returns positions within `order`, not original indices.
fn two_pointer(
    sequence: &[i64],
    order: &[usize],
    mut low: usize,
    mut high: usize,
    target: i128,
    stats: &mut ScanStatistics,
) -> Option<(usize, usize)> {
    while low < high {
        stats.increment(Counter::Comparisons);
        let sum = i128::from(sequence[order[low]]) + i128::from(sequence[order[high]]);
        match sum.cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => return Some((low, high)),
        }
    }
    None
}

pub fn resolve_pair_sorted(sequence: &[i64], target: i64) -> Option<Pair> {
    resolve_pair_sorted_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_pair_sorted_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Pair> {
    if sequence.len() < 2 {
        return None;
    }

    let order = sorted_order(sequence);
    let found = two_pointer(
        sequence,
        &order,
        0,
        sequence.len() - 1,
        i128::from(target),
        stats,
    )
    .map(|(low, high)| Pair::ascending(order[low], order[high]));

    debug!(
        "sorted pair scan over {} values for target {}: {:?}",
        sequence.len(),
        target,
        found
    );
    found
}

pub fn resolve_triplet_sorted(sequence: &[i64], target: i64) -> Option<Triplet> {
    resolve_triplet_sorted_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_triplet_sorted_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Triplet> {
    let n = sequence.len();
    if n < 3 {
        return None;
    }

    let order = sorted_order(sequence);
    let target = i128::from(target);
    let mut found = None;

    for fixed in 0..n - 2 {
        let remainder = target - i128::from(sequence[order[fixed]]);
        if let Some((low, high)) = two_pointer(sequence, &order, fixed + 1, n - 1, remainder, stats)
        {
            found = Some(Triplet::ascending(order[fixed], order[low], order[high]));
            break;
        }
    }

    debug!(
        "sorted triplet scan over {} values for target {}: {:?}",
        n, target, found
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Solution;

    #[test]
    fn test_sorted_order_is_stable() {
        assert_eq!(sorted_order(&[3, 1, 3, 0]), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_pair_maps_back_to_original_indices() {
        assert_eq!(resolve_pair_sorted(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
        assert_eq!(resolve_pair_sorted(&[3, 2, 4], 6), Some(Pair::new(1, 2)));
        assert_eq!(resolve_pair_sorted(&[15, 11, 7, 2], 9), Some(Pair::new(2, 3)));
    }

    #[test]
    fn test_pair_duplicates() {
        assert_eq!(resolve_pair_sorted(&[3, 3], 6), Some(Pair::new(0, 1)));
        assert_eq!(resolve_pair_sorted(&[3, 1], 6), None);
    }

    #[test]
    fn test_pair_short_sequences() {
        assert_eq!(resolve_pair_sorted(&[], 0), None);
        assert_eq!(resolve_pair_sorted(&[5], 10), None);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let sequence = vec![5, -1, 3, 0];
        let before = sequence.clone();
        let _ = resolve_pair_sorted(&sequence, 3);
        let _ = resolve_triplet_sorted(&sequence, 2);
        assert_eq!(sequence, before);
    }

    #[test]
    fn test_triplet() {
        let sequence = [2, 7, 11, 15, -2];
        let triplet = resolve_triplet_sorted(&sequence, 20).unwrap();
        assert!(triplet.is_solution(&sequence, 20));
        assert!(triplet.first < triplet.second && triplet.second < triplet.third);

        assert_eq!(resolve_triplet_sorted(&[1, 2, 3], 100), None);
        assert_eq!(resolve_triplet_sorted(&[1, 2], 3), None);
    }

    #[test]
    fn test_triplet_extreme_values() {
        let sequence = [i64::MAX, -1, 1];
        assert_eq!(
            resolve_triplet_sorted(&sequence, i64::MAX),
            Some(Triplet::new(0, 1, 2))
        );
    }

    #[test]
    fn test_pair_is_linear_after_sorting() {
        let mut stats = ScanStatistics::new();
        let sequence: Vec<i64> = (0..100).collect();
        assert_eq!(resolve_pair_sorted_with_stats(&sequence, 1000, &mut stats), None);
        assert!(stats.get(Counter::Comparisons) < 100);
    }
}
