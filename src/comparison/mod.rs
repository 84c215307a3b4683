//! Pairwise comparison of vehicle records.
//!
//! [`compare`] turns two records and an ordered metric set into one
//! [`ComparisonOutcome`] per metric; [`tally`] folds those outcomes into an
//! [`AggregateVerdict`]. Both are pure and hold no state between calls.

pub mod comparator;
pub mod metric;
pub mod types;
pub mod verdict;

pub use comparator::{compare, compare_metric, Comparator};
pub use metric::{
    reference_metrics, ComparisonMetric, Direction, Extraction, Reading, ValueDisplay,
};
pub use types::{AggregateVerdict, ComparisonOutcome, Side, Winner};
pub use verdict::tally;
