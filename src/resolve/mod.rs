// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index resolution for Two Sum and Three Sum.
//!
//! Every resolver takes a sequence of signed integers and a target, and
//! returns the indices of distinct elements whose values sum to the target,
//! or `None` when no such combination exists. Callers must never assume a
//! solution exists.
//!
//! # Strategies
//!
//! | Strategy   | Pair          | Triplet |
//! |------------|---------------|---------|
//! | hash       | O(n)          | O(n²)   |
//! | brute force| O(n²)         | O(n³)   |
//! | sorted     | O(n log n)    | O(n²)   |
//!
//! All strategies agree on whether a solution exists. When several solutions
//! exist they may return different indices; which one is returned is an
//! artifact of scan order and is not part of the contract.
//!
//! Indices are always returned in ascending order.
//!
//! # Arithmetic
//!
//! Sums and complements are evaluated in `i128`, so inputs anywhere in the
//! `i64` range are handled without overflow. A complement that falls outside
//! `i64` cannot match any element and is simply never looked up.
//!
//! # Example
//!
//! ```
//! use sum_search::resolve::{resolve_pair, resolve_triplet, Pair, Triplet};
//!
//! assert_eq!(resolve_pair(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
//! assert_eq!(resolve_triplet(&[2, 7, 11, 15, -2], 20), Some(Triplet::new(0, 1, 2)));
//! assert_eq!(resolve_triplet(&[1, 2, 3], 100), None);
//! ```

pub mod pair;
pub mod sorted;
pub mod triplet;

pub use pair::{
    resolve_pair, resolve_pair_brute_force, resolve_pair_brute_force_with_stats,
    resolve_pair_with_stats,
};
pub use sorted::{
    resolve_pair_sorted, resolve_pair_sorted_with_stats, resolve_triplet_sorted,
    resolve_triplet_sorted_with_stats,
};
pub use triplet::{
    resolve_triplet, resolve_triplet_brute_force, resolve_triplet_brute_force_with_stats,
    resolve_triplet_with_stats,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value that, added to `value`, reaches `sum`, if it fits in an `i64`.
pub(crate) fn complement(sum: i128, value: i64) -> Option<i64> {
    i64::try_from(sum - i128::from(value)).ok()
}

/// A set of indices into a sequence, claimed to sum to some target.
pub trait Solution: Copy + fmt::Debug + fmt::Display {
    /// Number of indices in the solution.
    const ARITY: usize;

    fn indices(&self) -> Vec<usize>;

    /// Values at the indices, or `None` if any index is out of range.
    fn values(&self, sequence: &[i64]) -> Option<Vec<i64>> {
        self.indices()
            .into_iter()
            .map(|index| sequence.get(index).copied())
            .collect()
    }

    /// Check that the indices are pairwise distinct, in range, and that their
    /// values sum to `target`.
    fn is_solution(&self, sequence: &[i64], target: i64) -> bool {
        let indices = self.indices();
        let distinct = indices
            .iter()
            .enumerate()
            .all(|(pos, index)| !indices[pos + 1..].contains(index));
        if !distinct {
            return false;
        }
        match self.values(sequence) {
            Some(values) => {
                values.iter().map(|&v| i128::from(v)).sum::<i128>() == i128::from(target)
            }
            None => false,
        }
    }
}

/// Indices of two elements summing to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Build a pair with its indices sorted ascending.
    pub fn ascending(a: usize, b: usize) -> Self {
        Self::new(a.min(b), a.max(b))
    }
}

impl Solution for Pair {
    const ARITY: usize = 2;

    fn indices(&self) -> Vec<usize> {
        vec![self.first, self.second]
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Indices of three elements summing to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

impl Triplet {
    pub fn new(first: usize, second: usize, third: usize) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Build a triplet with its indices sorted ascending.
    pub fn ascending(a: usize, b: usize, c: usize) -> Self {
        let mut indices = [a, b, c];
        indices.sort_unstable();
        Self::new(indices[0], indices[1], indices[2])
    }
}

impl Solution for Triplet {
    const ARITY: usize = 3;

    fn indices(&self) -> Vec<usize> {
        vec![self.first, self.second, self.third]
    }
}

impl From<Triplet> for (usize, usize, usize) {
    fn from(triplet: Triplet) -> Self {
        (triplet.first, triplet.second, triplet.third)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.first, self.second, self.third)
    }
}
