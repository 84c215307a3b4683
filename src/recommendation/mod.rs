//! Rule-based recommendation text for one side of a comparison.
//!
//! Three tiers, checked in order, first match wins:
//!
//! 1. more wins than the other side -> [`RecommendationKind::Superior`]
//! 2. strictly cheaper -> [`RecommendationKind::BestValue`]
//! 3. otherwise -> [`RecommendationKind::Alternative`]
//!
//! The precedence is fixed; price only matters when the win count does not
//! already decide.

pub mod messages;

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleRecord;

/// Number of `pros` surfaced as highlights
pub const HIGHLIGHT_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Superior,
    BestValue,
    Alternative,
}

impl RecommendationKind {
    pub fn message(self) -> &'static str {
        match self {
            RecommendationKind::Superior => messages::SUPERIOR,
            RecommendationKind::BestValue => messages::BEST_VALUE,
            RecommendationKind::Alternative => messages::ALTERNATIVE,
        }
    }
}

/// Guidance for one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    /// Leading entries of the vehicle's `pros`, at most [`HIGHLIGHT_COUNT`]
    pub highlights: Vec<String>,
}

/// Pick the recommendation tier for `side` and attach its highlights.
pub fn summarize(
    side: &VehicleRecord,
    own_wins: usize,
    other_wins: usize,
    own_price: f64,
    other_price: f64,
) -> Recommendation {
    let kind = classify(own_wins, other_wins, own_price, other_price);
    Recommendation {
        kind,
        message: kind.message().to_string(),
        highlights: side.pros.iter().take(HIGHLIGHT_COUNT).cloned().collect(),
    }
}

/// The tier decision on its own
pub fn classify(
    own_wins: usize,
    other_wins: usize,
    own_price: f64,
    other_price: f64,
) -> RecommendationKind {
    if own_wins > other_wins {
        RecommendationKind::Superior
    } else if own_price < other_price {
        RecommendationKind::BestValue
    } else {
        RecommendationKind::Alternative
    }
}
