// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sum_search::Solution;

/// Fixed seed so randomized tests are reproducible.
pub const SEED: u64 = 0x5eed_2025;

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// A random sequence of up to `max_len` values drawn from `-spread..=spread`.
///
/// A small spread makes duplicates and multiple solutions common.
pub fn random_sequence(rng: &mut ChaCha8Rng, max_len: usize, spread: i64) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(-spread..=spread)).collect()
}

pub fn random_target(rng: &mut ChaCha8Rng, spread: i64) -> i64 {
    rng.gen_range(-spread..=spread)
}

/// Assert that `found` is a valid solution with ascending indices.
pub fn assert_valid<T: Solution>(found: &T, sequence: &[i64], target: i64) {
    assert!(
        found.is_solution(sequence, target),
        "{} is not a solution for target {} in {:?}",
        found,
        target,
        sequence
    );
    let indices = found.indices();
    assert_eq!(indices.len(), T::ARITY);
    assert!(
        indices.windows(2).all(|w| w[0] < w[1]),
        "{} is not in ascending order",
        found
    );
}
