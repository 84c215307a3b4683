//! Declarative comparison metrics.
//!
//! A metric names one axis of comparison, says where the comparable number
//! comes from ([`Extraction`]), which way is better ([`Direction`]) and how a
//! direct numeric field is rendered for display ([`ValueDisplay`]). The set
//! of metrics is configuration: [`reference_metrics`] is the default and the
//! config file may replace it.

use serde::{Deserialize, Serialize};

use super::types::Winner;
use crate::vehicle::quantity::leading_number;
use crate::vehicle::{NumericField, SpecField, VehicleRecord};

/// Which extracted value is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Decide the winner between two extracted values.
    ///
    /// Exact equality ties; no rounding tolerance is applied.
    pub fn winner(self, first: f64, second: f64) -> Winner {
        let (better, worse) = match self {
            Direction::HigherIsBetter => (first > second, second > first),
            Direction::LowerIsBetter => (first < second, second < first),
        };
        match (better, worse) {
            (true, _) => Winner::First,
            (_, true) => Winner::Second,
            _ => Winner::Tie,
        }
    }
}

/// Where a metric reads its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extraction {
    /// A numeric field on the record, used as-is
    Direct(NumericField),
    /// A formatted spec string, reduced to its leading numeric token
    Parsed(SpecField),
}

/// A value read from one record for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// What the user sees
    pub rendered: String,
    /// What gets compared; `None` when the text has no numeric token
    pub magnitude: Option<f64>,
}

impl Extraction {
    /// Evaluate this rule against a record
    pub fn extract(&self, record: &VehicleRecord, display: &ValueDisplay) -> Reading {
        match *self {
            Extraction::Direct(field) => {
                let value = record.numeric(field);
                Reading {
                    rendered: display.render(value),
                    magnitude: Some(value),
                }
            }
            Extraction::Parsed(field) => {
                let text = record.spec(field);
                Reading {
                    rendered: text.to_string(),
                    magnitude: leading_number(text),
                }
            }
        }
    }
}

/// Rendering rule for direct numeric fields.
///
/// Parsed spec strings are always shown verbatim and ignore this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueDisplay {
    #[default]
    Plain,
    /// `€45,000`
    Currency { symbol: String },
    /// `-15%`
    Loss,
    /// `4.5/5`
    OutOfFive,
}

impl ValueDisplay {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueDisplay::Plain => format!("{}", value),
            ValueDisplay::Currency { symbol } => format!("{}{}", symbol, group_thousands(value)),
            ValueDisplay::Loss => format!("-{}%", value),
            ValueDisplay::OutOfFive => format!("{}/5", value),
        }
    }
}

/// Format with comma thousands separators and at most two decimals.
pub fn group_thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// One axis of comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetric {
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub extraction: Extraction,
    pub direction: Direction,
    #[serde(default)]
    pub display: ValueDisplay,
}

impl ComparisonMetric {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        extraction: Extraction,
        direction: Direction,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            extraction,
            direction,
            display: ValueDisplay::Plain,
        }
    }

    pub fn with_display(mut self, display: ValueDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn read(&self, record: &VehicleRecord) -> Reading {
        self.extraction.extract(record, &self.display)
    }
}

/// Default metric set: price, depreciation, power, consumption,
/// acceleration and rating, in that order.
pub fn reference_metrics(currency_symbol: &str) -> Vec<ComparisonMetric> {
    vec![
        ComparisonMetric::new(
            "Price",
            "List price",
            Extraction::Direct(NumericField::Price),
            Direction::LowerIsBetter,
        )
        .with_display(ValueDisplay::Currency {
            symbol: currency_symbol.to_string(),
        }),
        ComparisonMetric::new(
            "Depreciation",
            "Estimated value loss over 3 years",
            Extraction::Direct(NumericField::Depreciation),
            Direction::LowerIsBetter,
        )
        .with_display(ValueDisplay::Loss),
        ComparisonMetric::new(
            "Power",
            "Maximum engine power",
            Extraction::Parsed(SpecField::Power),
            Direction::HigherIsBetter,
        ),
        ComparisonMetric::new(
            "Consumption",
            "Average combined consumption",
            Extraction::Parsed(SpecField::Consumption),
            Direction::LowerIsBetter,
        ),
        ComparisonMetric::new(
            "Acceleration",
            "0-100 km/h time",
            Extraction::Parsed(SpecField::Acceleration),
            Direction::LowerIsBetter,
        ),
        ComparisonMetric::new(
            "Rating",
            "Average user rating",
            Extraction::Direct(NumericField::Rating),
            Direction::HigherIsBetter,
        )
        .with_display(ValueDisplay::OutOfFive),
    ]
}
