// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A validated search request.
//!
//! There are no configuration files: a request is built from command-line
//! arguments (or directly by library callers) and carries everything one
//! resolution needs.

use log::info;

use crate::errors::{Result, SumSearchError};
use crate::report::SearchReport;
use crate::resolve::Solution;
use crate::statistics::ScanStatistics;
use crate::strategy::{cross_check_pair, cross_check_triplet, Arity, Strategy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub sequence: Vec<i64>,
    pub target: i64,
    pub arity: Arity,
    pub strategy: Strategy,
    /// Also run [`Strategy::reference`] and fail if it disagrees.
    pub cross_check: bool,
}

impl SearchRequest {
    /// A pair search with the default strategy.
    pub fn new(sequence: Vec<i64>, target: i64) -> Self {
        Self {
            sequence,
            target,
            arity: Arity::Pair,
            strategy: Strategy::default(),
            cross_check: false,
        }
    }

    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_cross_check(mut self, cross_check: bool) -> Self {
        self.cross_check = cross_check;
        self
    }

    /// Resolve the request.
    ///
    /// A missing solution is reported in the returned [`SearchReport`], not as
    /// an error. The only error is a failed cross-check.
    pub fn run(&self) -> Result<SearchReport> {
        info!(
            "resolving {} over {} values for target {} with {}",
            self.arity,
            self.sequence.len(),
            self.target,
            self.strategy
        );

        if self.cross_check {
            return self.run_cross_checked();
        }

        let mut statistics = ScanStatistics::new();
        let indices = self.strategy.resolver().resolve(
            self.arity,
            &self.sequence,
            self.target,
            &mut statistics,
        );
        Ok(SearchReport::new(self, indices, statistics, None))
    }

    fn run_cross_checked(&self) -> Result<SearchReport> {
        let reference = Strategy::reference();
        let (indices, statistics) = match self.arity {
            Arity::Pair => {
                let check = cross_check_pair(&self.sequence, self.target, self.strategy, reference);
                let statistics = check.primary_statistics.clone();
                let found = check.into_result()?;
                (found.map(|pair| pair.indices()), statistics)
            }
            Arity::Triplet => {
                let check =
                    cross_check_triplet(&self.sequence, self.target, self.strategy, reference);
                let statistics = check.primary_statistics.clone();
                let found = check.into_result()?;
                (found.map(|triplet| triplet.indices()), statistics)
            }
        };
        Ok(SearchReport::new(self, indices, statistics, Some(reference)))
    }
}

/// Parse integers from tokens, each of which may hold a comma-separated list.
///
/// Empty pieces are skipped, so `["2,7,", "11"]` parses as `[2, 7, 11]`. An
/// empty input yields an empty sequence, which resolves to not-found.
pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>> {
    tokens
        .iter()
        .flat_map(|token| token.as_ref().split(','))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse::<i64>()
                .map_err(|source| SumSearchError::InvalidInteger {
                    token: piece.to_string(),
                    source,
                })
        })
        .collect()
}
