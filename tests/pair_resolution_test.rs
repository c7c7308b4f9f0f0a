// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for Two Sum resolution.
//!
//! These tests validate that pair resolvers:
//! - Return the expected indices for the classic scenarios
//! - Return None for short sequences and impossible targets
//! - Never pair an element with itself

mod common;

use common::assert_valid;
use sum_search::resolve::{resolve_pair_sorted, resolve_pair_with_stats};
use sum_search::{resolve_pair, resolve_pair_brute_force, Counter, Pair, ScanStatistics};

#[test]
fn test_classic_scenarios() {
    let cases: [(&[i64], i64, (usize, usize)); 5] = [
        (&[2, 7, 11, 15], 9, (0, 1)),
        (&[3, 2, 4], 6, (1, 2)),
        (&[3, 3], 6, (0, 1)),
        (&[1, 5, 3, 8, 2], 10, (3, 4)),
        (&[-1, -2, -3, -4, -5], -8, (2, 4)),
    ];

    for (sequence, target, expected) in cases {
        let found = resolve_pair(sequence, target).expect("hash lookup found nothing");
        assert_eq!(<(usize, usize)>::from(found), expected);

        let brute = resolve_pair_brute_force(sequence, target).expect("brute force found nothing");
        assert_eq!(<(usize, usize)>::from(brute), expected);

        let sorted = resolve_pair_sorted(sequence, target).expect("sorted scan found nothing");
        assert_valid(&sorted, sequence, target);
    }
}

#[test]
fn test_short_sequences_never_resolve() {
    for target in [-5, 0, 5, 10, i64::MAX] {
        assert_eq!(resolve_pair(&[], target), None);
        assert_eq!(resolve_pair(&[5], target), None);
        assert_eq!(resolve_pair_brute_force(&[], target), None);
        assert_eq!(resolve_pair_brute_force(&[5], target), None);
        assert_eq!(resolve_pair_sorted(&[5], target), None);
    }
}

#[test]
fn test_no_solution() {
    let sequence = [1, 2, 4, 8, 16];
    assert_eq!(resolve_pair(&sequence, 7), None);
    assert_eq!(resolve_pair_brute_force(&sequence, 7), None);
    assert_eq!(resolve_pair_sorted(&sequence, 7), None);
}

#[test]
fn test_single_element_is_not_doubled() {
    // 5 + 5 == 10, but 5 appears once.
    let sequence = [1, 5, 7];
    assert_eq!(resolve_pair(&sequence, 10), None);
    assert_eq!(resolve_pair_brute_force(&sequence, 10), None);
    assert_eq!(resolve_pair_sorted(&sequence, 10), None);
}

#[test]
fn test_zero_target_with_opposites() {
    let sequence = [4, -7, 0, 7, 3];
    assert_eq!(resolve_pair(&sequence, 0), Some(Pair::new(1, 3)));
    assert_eq!(resolve_pair_brute_force(&sequence, 0), Some(Pair::new(1, 3)));
}

#[test]
fn test_hash_scan_stops_at_first_match() {
    let mut stats = ScanStatistics::new();
    let sequence = [2, 7, 11, 15, 1, 8];
    assert_eq!(
        resolve_pair_with_stats(&sequence, 9, &mut stats),
        Some(Pair::new(0, 1))
    );
    assert_eq!(stats.get(Counter::Lookups), 2);
    assert_eq!(stats.get(Counter::Observations), 1);
}

#[test]
fn test_large_sequence_is_linear() {
    let sequence: Vec<i64> = (0..10_000).collect();
    let mut stats = ScanStatistics::new();
    let found = resolve_pair_with_stats(&sequence, 19_997, &mut stats).unwrap();
    assert_eq!(found, Pair::new(9_998, 9_999));
    assert_eq!(stats.get(Counter::Lookups), 10_000);
}
