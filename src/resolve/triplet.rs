// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Three Sum: resolve one triplet of indices whose values sum to a target.
//!
//! The hash strategy fixes each index `i` in turn and reduces the rest of the
//! problem to Two Sum over `i+1..n` with target `target - sequence[i]`. Each
//! inner scan gets its own [`IndexLookup`]; nothing is carried from one fixed
//! index to the next.

use log::{debug, trace};

use super::{complement, Triplet};
use crate::lookup::IndexLookup;
use crate::statistics::{Counter, ScanStatistics};

/// Find a triplet in O(n²) time and O(n) space.
///
/// Returns `(i, lookup(complement), j)` for the first inner match, where `i`
/// is the fixed index and `j` the position that completed the pair.
pub fn resolve_triplet(sequence: &[i64], target: i64) -> Option<Triplet> {
    resolve_triplet_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_triplet_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Triplet> {
    let found = scan_with_lookup(sequence, target, stats);
    debug!(
        "hash triplet scan over {} values for target {}: {:?}",
        sequence.len(),
        target,
        found
    );
    found
}

fn scan_with_lookup(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Triplet> {
    if sequence.len() < 3 {
        return None;
    }

    let target = i128::from(target);
    for (i, &fixed) in sequence.iter().enumerate() {
        let remainder = target - i128::from(fixed);
        if let Some((middle, last)) = inner_pair(sequence, i, remainder, stats) {
            return Some(Triplet::new(i, middle, last));
        }
    }

    None
}

/// Two Sum over `sequence[fixed+1..]` for `remainder`, with a fresh lookup.
fn inner_pair(
    sequence: &[i64],
    fixed: usize,
    remainder: i128,
    stats: &mut ScanStatistics,
) -> Option<(usize, usize)> {
    trace!("opening lookup scope after fixed index {}", fixed);
    stats.increment(Counter::Scopes);
    let mut seen = IndexLookup::new();

    for (j, &value) in sequence.iter().enumerate().skip(fixed + 1) {
        if let Some(needed) = complement(remainder, value) {
            stats.increment(Counter::Lookups);
            if let Some(middle) = seen.lookup(needed) {
                return Some((middle, j));
            }
        }
        stats.increment(Counter::Observations);
        seen.observe(value, j);
    }

    None
}

/// Find a triplet in O(n³) by testing every `i < j < k`.
///
/// Returns the first match in that enumeration order.
pub fn resolve_triplet_brute_force(sequence: &[i64], target: i64) -> Option<Triplet> {
    resolve_triplet_brute_force_with_stats(sequence, target, &mut ScanStatistics::new())
}

pub fn resolve_triplet_brute_force_with_stats(
    sequence: &[i64],
    target: i64,
    stats: &mut ScanStatistics,
) -> Option<Triplet> {
    let target = i128::from(target);
    let n = sequence.len();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                stats.increment(Counter::Comparisons);
                let sum = i128::from(sequence[i])
                    + i128::from(sequence[j])
                    + i128::from(sequence[k]);
                if sum == target {
                    debug!("brute force triplet scan found ({}, {}, {})", i, j, k);
                    return Some(Triplet::new(i, j, k));
                }
            }
        }
    }

    debug!("brute force triplet scan over {} values: not found", n);
    None
}
