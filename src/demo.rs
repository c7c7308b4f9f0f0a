// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Built-in scenarios replayed by `sumsearch demo`.

use crate::strategy::Arity;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub description: &'static str,
    pub sequence: &'static [i64],
    pub target: i64,
    pub arity: Arity,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        description: "first two elements sum to target",
        sequence: &[2, 7, 11, 15],
        target: 9,
        arity: Arity::Pair,
    },
    Scenario {
        description: "target requires elements from middle and end",
        sequence: &[3, 2, 4],
        target: 6,
        arity: Arity::Pair,
    },
    Scenario {
        description: "duplicate numbers that sum to target",
        sequence: &[3, 3],
        target: 6,
        arity: Arity::Pair,
    },
    Scenario {
        description: "only the last two elements sum to target",
        sequence: &[1, 5, 3, 8, 2],
        target: 10,
        arity: Arity::Pair,
    },
    Scenario {
        description: "negative numbers",
        sequence: &[-1, -2, -3, -4, -5],
        target: -8,
        arity: Arity::Pair,
    },
    Scenario {
        description: "triplet among positive and negative numbers",
        sequence: &[2, 7, 11, 15, -2],
        target: 20,
        arity: Arity::Triplet,
    },
    Scenario {
        description: "triplet in the middle of the sequence",
        sequence: &[1, 4, 6, 8, 10, 45],
        target: 22,
        arity: Arity::Triplet,
    },
    Scenario {
        description: "no triplet reaches the target",
        sequence: &[1, 2, 3],
        target: 100,
        arity: Arity::Triplet,
    },
];
