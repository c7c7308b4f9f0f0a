// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The outcome of a [`SearchRequest`](crate::config::SearchRequest), ready
//! for display or JSON encoding.

use serde::Serialize;
use std::fmt;

use crate::config::SearchRequest;
use crate::errors::Result;
use crate::statistics::ScanStatistics;
use crate::strategy::{Arity, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub arity: Arity,
    pub target: i64,
    /// Indices of the solution, or `None` when nothing sums to the target.
    pub indices: Option<Vec<usize>>,
    pub values: Option<Vec<i64>>,
    pub statistics: ScanStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_checked_against: Option<Strategy>,
}

impl SearchReport {
    pub fn new(
        request: &SearchRequest,
        indices: Option<Vec<usize>>,
        statistics: ScanStatistics,
        cross_checked_against: Option<Strategy>,
    ) -> Self {
        let values = indices.as_ref().map(|indices| {
            indices
                .iter()
                .map(|&index| request.sequence[index])
                .collect()
        });
        Self {
            strategy: request.strategy,
            arity: request.arity,
            target: request.target,
            indices,
            values,
            statistics,
            cross_checked_against,
        }
    }

    pub fn found(&self) -> bool {
        self.indices.is_some()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.indices, &self.values) {
            (Some(indices), Some(values)) => {
                let terms = values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(" + ");
                write!(
                    f,
                    "Found {} at indices {:?}: {} = {}",
                    self.arity, indices, terms, self.target
                )?;
            }
            _ => write!(f, "No {} sums to {}", self.arity, self.target)?,
        }
        write!(
            f,
            " [{}, {}; {}]",
            self.strategy,
            self.strategy.complexity(self.arity),
            self.statistics
        )?;
        if let Some(reference) = self.cross_checked_against {
            write!(f, " (agrees with {})", reference)?;
        }
        Ok(())
    }
}
