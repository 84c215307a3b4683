use serde::{Deserialize, Serialize};

use super::metric::Direction;

/// Which side won a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl Winner {
    /// The same result seen with the two sides swapped
    pub fn flip(self) -> Self {
        match self {
            Winner::First => Winner::Second,
            Winner::Second => Winner::First,
            Winner::Tie => Winner::Tie,
        }
    }
}

/// Result of comparing two records on one metric.
///
/// Values are the rendered originals, never the parsed magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub category: String,
    pub description: String,
    pub direction: Direction,
    pub first_value: String,
    pub second_value: String,
    pub winner: Winner,
}

/// Win counts across all outcomes plus the overall winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateVerdict {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
    pub winner: Winner,
}

impl AggregateVerdict {
    pub fn total(&self) -> usize {
        self.first_wins + self.second_wins + self.ties
    }

    /// Wins for `side` and for its opponent, in that order
    pub fn wins_for(&self, side: Side) -> (usize, usize) {
        match side {
            Side::First => (self.first_wins, self.second_wins),
            Side::Second => (self.second_wins, self.first_wins),
        }
    }
}

/// One side of a pairwise comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}
