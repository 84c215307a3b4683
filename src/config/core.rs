use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use crate::comparison::{reference_metrics, ComparisonMetric};
use crate::depreciation::DepreciationModel;

/// Root configuration structure for autocompare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AutocompareConfig {
    /// Display configuration for output formatting
    #[serde(default)]
    pub display: DisplayConfig,

    /// Depreciation curve constants
    #[serde(default)]
    pub projection: DepreciationModel,

    /// Replacement metric set; the reference set is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<ComparisonMetric>>,
}

impl AutocompareConfig {
    /// The metric set comparisons should run with
    pub fn metrics(&self) -> Vec<ComparisonMetric> {
        match &self.metrics {
            Some(metrics) if !metrics.is_empty() => metrics.clone(),
            _ => reference_metrics(&self.display.currency_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{Direction, Extraction};
    use crate::vehicle::SpecField;

    #[test]
    fn defaults_to_reference_metrics() {
        let config = AutocompareConfig::default();
        let metrics = config.metrics();
        assert_eq!(metrics.len(), 6);
        assert_eq!(metrics[0].category, "Price");
    }

    #[test]
    fn currency_symbol_flows_into_reference_metrics() {
        let mut config = AutocompareConfig::default();
        config.display.currency_symbol = "$".into();
        let sedan = crate::vehicle::fixtures::sedan_a();
        assert_eq!(config.metrics()[0].read(&sedan).rendered, "$45,000");
    }

    #[test]
    fn configured_metrics_replace_reference_set() {
        let config = AutocompareConfig {
            metrics: Some(vec![ComparisonMetric::new(
                "Top speed",
                "",
                Extraction::Parsed(SpecField::TopSpeed),
                Direction::HigherIsBetter,
            )]),
            ..Default::default()
        };
        assert_eq!(config.metrics().len(), 1);
    }
}
