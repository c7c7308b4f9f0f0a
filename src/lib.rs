// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index resolution for Two Sum and Three Sum.
//!
//! Given a sequence of signed integers and a target, find the indices of two
//! or three distinct elements whose values add up to the target.
//!
//! # Architecture
//!
//! ## IndexLookup
//!
//! A value → first-seen-index map built during one forward scan. It is the
//! leaf of everything else, created fresh per call and dropped on return.
//!
//! ## Resolvers
//!
//! - **Pair**: one scan with an IndexLookup, O(n); brute force, O(n²)
//! - **Triplet**: fix each index and run a fresh pair scan over the rest,
//!   O(n²); brute force, O(n³)
//! - **Sorted**: stable index sort plus two pointers, for both arities
//!
//! ## Strategies
//!
//! The resolvers are exposed as interchangeable [`Strategy`] values behind one
//! [`Resolver`] trait, so callers can pick one at run time and cross-check it
//! against brute force.
//!
//! # Results
//!
//! A missing solution is `None`, never an error. When several solutions exist,
//! which one is returned depends on scan order and differs between
//! strategies; only existence and sum-correctness are guaranteed.

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod lookup;
pub mod report;
pub mod resolve;
pub mod statistics;
pub mod strategy;

// Re-export commonly used types
pub use errors::{Result, SumSearchError};
pub use lookup::IndexLookup;
pub use resolve::{
    resolve_pair, resolve_pair_brute_force, resolve_triplet, resolve_triplet_brute_force, Pair,
    Solution, Triplet,
};
pub use statistics::{Counter, ScanStatistics};
pub use strategy::{Arity, Resolver, Strategy};
