// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for everything outside the resolvers themselves.
//!
//! A missing solution is not an error: resolvers return `None`. These errors
//! cover malformed requests and internal inconsistencies.

use crate::strategy::Strategy;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SumSearchError {
    /// A sequence token is not a valid 64-bit signed integer.
    #[error("invalid integer {token:?} in sequence")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown strategy {name:?} (expected one of: {expected})")]
    UnknownStrategy { name: String, expected: String },

    /// Only pairs (2) and triplets (3) are resolvable.
    #[error("unsupported arity {0} (expected 2 or 3)")]
    UnsupportedArity(usize),

    /// Two strategies disagreed on whether a solution exists, or one of them
    /// returned indices that do not sum to the target.
    #[error(
        "strategies disagree: {primary} found={primary_found} valid={primary_valid}, \
         {reference} found={reference_found} valid={reference_valid}"
    )]
    StrategyDisagreement {
        primary: Strategy,
        reference: Strategy,
        primary_found: bool,
        primary_valid: bool,
        reference_found: bool,
        reference_valid: bool,
    },

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SumSearchError>;
