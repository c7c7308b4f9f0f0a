// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scan statistics
//!
//! Resolvers take a `&mut ScanStatistics` and bump a counter for each unit of
//! work they do. The counts make the asymptotic behaviour of each strategy
//! observable without timing anything.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, Display, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counter {
    /// Direct sum tests (brute force and two-pointer steps).
    Comparisons,
    /// Complement queries against an [`IndexLookup`](crate::lookup::IndexLookup).
    Lookups,
    /// Values offered to an [`IndexLookup`](crate::lookup::IndexLookup).
    Observations,
    /// Fresh [`IndexLookup`](crate::lookup::IndexLookup) scopes opened.
    Scopes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStatistics {
    stats: [u64; Counter::COUNT],
}

impl ScanStatistics {
    pub fn new() -> Self {
        ScanStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.stats.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::iter().map(move |counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (counter, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", counter, value)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for ScanStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Counter::COUNT))?;
        for (counter, value) in self.iter() {
            map.serialize_entry(&counter.to_string(), &value)?;
        }
        map.end()
    }
}
