// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interchangeable resolution strategies.
//!
//! Each strategy implements the same [`Resolver`] contract for pairs and
//! triplets. A [`Strategy`] names one of them and is what callers configure;
//! [`Strategy::resolver`] hands back the implementation.
//!
//! # Example
//!
//! ```
//! use sum_search::statistics::ScanStatistics;
//! use sum_search::strategy::Strategy;
//! use strum::IntoEnumIterator;
//!
//! for strategy in Strategy::iter() {
//!     let mut stats = ScanStatistics::new();
//!     let found = strategy.resolver().resolve_pair(&[3, 2, 4], 6, &mut stats);
//!     assert!(found.is_some(), "{} found nothing", strategy);
//! }
//! ```

pub mod cross_check;

pub use cross_check::{cross_check_pair, cross_check_triplet, CrossCheck};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::errors::{Result, SumSearchError};
use crate::resolve::{self, Pair, Triplet};
use crate::statistics::ScanStatistics;

/// Number of elements combined to reach the target.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    Pair,
    Triplet,
}

impl Arity {
    pub fn element_count(self) -> usize {
        match self {
            Arity::Pair => 2,
            Arity::Triplet => 3,
        }
    }
}

impl TryFrom<usize> for Arity {
    type Error = SumSearchError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            2 => Ok(Arity::Pair),
            3 => Ok(Arity::Triplet),
            other => Err(SumSearchError::UnsupportedArity(other)),
        }
    }
}

/// A named resolution strategy.
#[derive(
    Debug,
    Default,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Single forward scan with an [`IndexLookup`](crate::lookup::IndexLookup).
    #[default]
    HashLookup,
    /// Exhaustive nested loops.
    BruteForce,
    /// Stable sort of the indices, then two pointers.
    SortedScan,
}

impl Strategy {
    /// The strategy other strategies are checked against.
    pub const fn reference() -> Self {
        Strategy::BruteForce
    }

    pub fn resolver(self) -> &'static dyn Resolver {
        match self {
            Strategy::HashLookup => &HashLookupResolver,
            Strategy::BruteForce => &BruteForceResolver,
            Strategy::SortedScan => &SortedScanResolver,
        }
    }

    /// Time complexity for the given arity.
    pub fn complexity(self, arity: Arity) -> &'static str {
        match (self, arity) {
            (Strategy::HashLookup, Arity::Pair) => "O(n)",
            (Strategy::HashLookup, Arity::Triplet) => "O(n^2)",
            (Strategy::BruteForce, Arity::Pair) => "O(n^2)",
            (Strategy::BruteForce, Arity::Triplet) => "O(n^3)",
            (Strategy::SortedScan, Arity::Pair) => "O(n log n)",
            (Strategy::SortedScan, Arity::Triplet) => "O(n^2)",
        }
    }

    /// Parse a strategy name, listing the valid names on failure.
    pub fn from_name(name: &str) -> Result<Self> {
        Strategy::from_str(name).map_err(|_| SumSearchError::UnknownStrategy {
            name: name.to_string(),
            expected: Strategy::iter()
                .map(|strategy| strategy.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// The shared contract of every strategy.
///
/// Implementations are stateless; all per-call state (lookups, sort orders)
/// lives inside a single call. Counters are accumulated into `stats`.
pub trait Resolver: Debug + Send + Sync {
    fn resolve_pair(&self, sequence: &[i64], target: i64, stats: &mut ScanStatistics)
        -> Option<Pair>;

    fn resolve_triplet(
        &self,
        sequence: &[i64],
        target: i64,
        stats: &mut ScanStatistics,
    ) -> Option<Triplet>;

    /// Resolve either arity, returning the indices of whatever was found.
    fn resolve(
        &self,
        arity: Arity,
        sequence: &[i64],
        target: i64,
        stats: &mut ScanStatistics,
    ) -> Option<Vec<usize>> {
        use crate::resolve::Solution;
        match arity {
            Arity::Pair => self
                .resolve_pair(sequence, target, stats)
                .map(|pair| pair.indices()),
            Arity::Triplet => self
                .resolve_triplet(sequence, target, stats)
                .map(|triplet| triplet.indices()),
        }
    }

    /// Optional: a name for this resolver (for debugging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HashLookupResolver;

impl Resolver for HashLookupResolver {
    fn resolve_pair(&self, sequence: &[i64], target: i64, stats: &mut ScanStatistics) -> Option<Pair> {
        resolve::resolve_pair_with_stats(sequence, target, stats)
    }

    fn resolve_triplet(
        &self,
        sequence: &[i64],
        target: i64,
        stats: &mut ScanStatistics,
    ) -> Option<Triplet> {
        resolve::resolve_triplet_with_stats(sequence, target, stats)
    }

    fn name(&self) -> &str {
        "HashLookup"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceResolver;

impl Resolver for BruteForceResolver {
    fn resolve_pair(&self, sequence: &[i64], target: i64, stats: &mut ScanStatistics) -> Option<Pair> {
        resolve::resolve_pair_brute_force_with_stats(sequence, target, stats)
    }

    fn resolve_triplet(
        &self,
        sequence: &[i64],
        target: i64,
        stats: &mut ScanStatistics,
    ) -> Option<Triplet> {
        resolve::resolve_triplet_brute_force_with_stats(sequence, target, stats)
    }

    fn name(&self) -> &str {
        "BruteForce"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SortedScanResolver;

impl Resolver for SortedScanResolver {
    fn resolve_pair(&self, sequence: &[i64], target: i64, stats: &mut ScanStatistics) -> Option<Pair> {
        resolve::resolve_pair_sorted_with_stats(sequence, target, stats)
    }

    fn resolve_triplet(
        &self,
        sequence: &[i64],
        target: i64,
        stats: &mut ScanStatistics,
    ) -> Option<Triplet> {
        resolve::resolve_triplet_sorted_with_stats(sequence, target, stats)
    }

    fn name(&self) -> &str {
        "SortedScan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Counter;
    use strum::EnumCount;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::HashLookup.to_string(), "hash-lookup");
        assert_eq!(Strategy::BruteForce.to_string(), "brute-force");
        assert_eq!(Strategy::SortedScan.to_string(), "sorted-scan");
        assert_eq!(Strategy::COUNT, 3);
        assert_eq!(Strategy::default(), Strategy::HashLookup);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Strategy::from_name("sorted-scan").unwrap(), Strategy::SortedScan);
        let err = Strategy::from_name("bogus").unwrap_err();
        assert!(matches!(err, SumSearchError::UnknownStrategy { .. }));
        assert!(err.to_string().contains("hash-lookup, brute-force, sorted-scan"));
    }

    #[test]
    fn test_arity_from_usize() {
        assert_eq!(Arity::try_from(2).unwrap(), Arity::Pair);
        assert_eq!(Arity::try_from(3).unwrap(), Arity::Triplet);
        assert!(matches!(
            Arity::try_from(4),
            Err(SumSearchError::UnsupportedArity(4))
        ));
        assert_eq!(Arity::Triplet.element_count(), 3);
    }

    #[test]
    fn test_resolver_dispatch() {
        let mut stats = ScanStatistics::new();
        let found = Strategy::BruteForce
            .resolver()
            .resolve(Arity::Pair, &[2, 7, 11, 15], 9, &mut stats);
        assert_eq!(found, Some(vec![0, 1]));
        assert_eq!(stats.get(Counter::Comparisons), 1);

        let mut stats = ScanStatistics::new();
        let found = Strategy::HashLookup
            .resolver()
            .resolve(Arity::Triplet, &[2, 7, 11, 15, -2], 20, &mut stats);
        assert_eq!(found, Some(vec![0, 1, 2]));
        assert_eq!(stats.get(Counter::Scopes), 1);
    }

    #[test]
    fn test_resolver_names() {
        assert_eq!(Strategy::HashLookup.resolver().name(), "HashLookup");
        assert_eq!(Strategy::SortedScan.resolver().name(), "SortedScan");
    }

    #[test]
    fn test_reference_is_brute_force() {
        assert_eq!(Strategy::reference(), Strategy::BruteForce);
        assert_eq!(Strategy::reference().complexity(Arity::Triplet), "O(n^3)");
    }
}
