// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run two strategies on the same input and compare them.
//!
//! Strategies may legitimately return different indices when several
//! solutions exist. They must agree on whether a solution exists, and
//! anything they return must actually sum to the target.

use log::{debug, warn};
use serde::Serialize;

use super::{Resolver, Strategy};
use crate::errors::{Result, SumSearchError};
use crate::resolve::{Pair, Solution, Triplet};
use crate::statistics::ScanStatistics;

/// Outcome of running a primary and a reference strategy side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCheck<T> {
    pub primary: Strategy,
    pub reference: Strategy,
    pub primary_result: Option<T>,
    pub reference_result: Option<T>,
    pub primary_statistics: ScanStatistics,
    pub reference_statistics: ScanStatistics,
    primary_valid: bool,
    reference_valid: bool,
}

impl<T: Solution> CrossCheck<T> {
    fn run<F>(sequence: &[i64], target: i64, primary: Strategy, reference: Strategy, resolve: F) -> Self
    where
        F: Fn(&dyn Resolver, &mut ScanStatistics) -> Option<T>,
    {
        let mut primary_statistics = ScanStatistics::new();
        let primary_result = resolve(primary.resolver(), &mut primary_statistics);
        let mut reference_statistics = ScanStatistics::new();
        let reference_result = resolve(reference.resolver(), &mut reference_statistics);

        let valid = |result: &Option<T>| {
            result
                .as_ref()
                .map_or(true, |found| found.is_solution(sequence, target))
        };

        let check = Self {
            primary,
            reference,
            primary_valid: valid(&primary_result),
            reference_valid: valid(&reference_result),
            primary_result,
            reference_result,
            primary_statistics,
            reference_statistics,
        };

        if check.agrees() {
            debug!(
                "{} and {} agree on {} values (target {})",
                primary,
                reference,
                sequence.len(),
                target
            );
        } else {
            warn!(
                "{} returned {:?} but {} returned {:?} (target {})",
                primary, check.primary_result, reference, check.reference_result, target
            );
        }
        check
    }

    /// Both agree on existence and every returned result is a valid solution.
    pub fn agrees(&self) -> bool {
        self.primary_valid
            && self.reference_valid
            && self.primary_result.is_some() == self.reference_result.is_some()
    }

    /// The primary result, or an error if the strategies disagree.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.agrees() {
            Ok(self.primary_result)
        } else {
            Err(SumSearchError::StrategyDisagreement {
                primary: self.primary,
                reference: self.reference,
                primary_found: self.primary_result.is_some(),
                primary_valid: self.primary_valid,
                reference_found: self.reference_result.is_some(),
                reference_valid: self.reference_valid,
            })
        }
    }
}

pub fn cross_check_pair(
    sequence: &[i64],
    target: i64,
    primary: Strategy,
    reference: Strategy,
) -> CrossCheck<Pair> {
    CrossCheck::run(sequence, target, primary, reference, |resolver, stats| {
        resolver.resolve_pair(sequence, target, stats)
    })
}

pub fn cross_check_triplet(
    sequence: &[i64],
    target: i64,
    primary: Strategy,
    reference: Strategy,
) -> CrossCheck<Triplet> {
    CrossCheck::run(sequence, target, primary, reference, |resolver, stats| {
        resolver.resolve_triplet(sequence, target, stats)
    })
}
