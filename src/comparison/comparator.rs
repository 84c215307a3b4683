use tracing::debug;

use super::metric::{reference_metrics, ComparisonMetric};
use super::types::{ComparisonOutcome, Winner};
use crate::vehicle::VehicleRecord;

/// Compare two records on every metric, in declaration order.
///
/// The output has exactly one outcome per metric. When either side of a
/// parsed metric has no numeric token the outcome is a tie and both values
/// are reported as supplied; this never fails.
pub fn compare(
    first: &VehicleRecord,
    second: &VehicleRecord,
    metrics: &[ComparisonMetric],
) -> Vec<ComparisonOutcome> {
    metrics
        .iter()
        .map(|metric| compare_metric(first, second, metric))
        .collect()
}

/// Compare two records on a single metric
pub fn compare_metric(
    first: &VehicleRecord,
    second: &VehicleRecord,
    metric: &ComparisonMetric,
) -> ComparisonOutcome {
    let a = metric.read(first);
    let b = metric.read(second);

    let winner = match (a.magnitude, b.magnitude) {
        (Some(x), Some(y)) => metric.direction.winner(x, y),
        _ => {
            debug!(
                category = %metric.category,
                first = %a.rendered,
                second = %b.rendered,
                "no numeric token on one side, scoring as tie"
            );
            Winner::Tie
        }
    };

    ComparisonOutcome {
        category: metric.category.clone(),
        description: metric.description.clone(),
        direction: metric.direction,
        first_value: a.rendered,
        second_value: b.rendered,
        winner,
    }
}

/// A fixed metric set applied to many record pairs
#[derive(Debug, Clone)]
pub struct Comparator {
    metrics: Vec<ComparisonMetric>,
}

impl Comparator {
    pub fn new(metrics: Vec<ComparisonMetric>) -> Self {
        Self { metrics }
    }

    /// Comparator over [`reference_metrics`]
    pub fn reference(currency_symbol: &str) -> Self {
        Self::new(reference_metrics(currency_symbol))
    }

    pub fn metrics(&self) -> &[ComparisonMetric] {
        &self.metrics
    }

    pub fn compare(&self, first: &VehicleRecord, second: &VehicleRecord) -> Vec<ComparisonOutcome> {
        compare(first, second, &self.metrics)
    }
}
