// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two Sum: resolve one pair of indices whose values sum to a target.

use log::debug;

use super::{complement, Pair};
use crate::lookup::IndexLookup;
use crate::statistics::{Counter, ScanStatistics};

/// Find a pair in O(n) with a single forward scan.
///
/// At each position `k` the complement `target - sequence[k]` is looked up
/// among the values already seen. The earliest-completing pair under
/// left-to-right order wins, and is returned as `(lookup(complement), k)`.
pub fn resolve_pair(sequence: &[i64], target: i64) -> Option<Pair> {
    resolve_pair_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_pair_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Pair> {
    let found = scan_with_lookup(sequence, target, stats);
    debug!(
        "hash pair scan over {} values for target {}: {:?}",
        sequence.len(),
        target,
        found
    );
    found
}

fn scan_with_lookup(sequence: &[i64], target: i64, stats: &mut ScanStatistics) -> Option<Pair> {
    if sequence.len() < 2 {
        return None;
    }

    stats.increment(Counter::Scopes);
    let mut seen = IndexLookup::with_capacity(sequence.len());
    let target = i128::from(target);

    for (k, &value) in sequence.iter().enumerate() {
        if let Some(needed) = complement(target, value) {
            stats.increment(Counter::Lookups);
            if let Some(first) = seen.lookup(needed) {
                return Some(Pair::new(first, k));
            }
        }
        stats.increment(Counter::Observations);
        seen.observe(value, k);
    }

    None
}

/// Find a pair in O(n²) by testing every `i < j` in nested-loop order.
///
/// Returns the first match in that enumeration order. Uses no extra space.
pub fn resolve_pair_brute_force(sequence: &[i64], target: i64) -> Option<Pair> {
    resolve_pair_brute_force_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_pair_brute_force_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Pair> {
    let target = i128::from(target);
    let found = sequence.iter().enumerate().find_map(|(i, &a)| {
        sequence
            .iter()
            .enumerate()
            .skip(i + 1)
            .find_map(|(j, &b)| {
                stats.increment(Counter::Comparisons);
                (i128::from(a) + i128::from(b) == target).then_some(Pair::new(i, j))
            })
    });
    debug!(
        "brute force pair scan over {} values: {:?}",
        sequence.len(),
        found
    );
    found
}
