//! Full comparison report: outcomes, verdict, recommendations for both
//! sides and the standing considerations, plus renderers for each output
//! format.

mod markdown;
pub mod projection;
mod terminal;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::{compare, tally, AggregateVerdict, ComparisonMetric, ComparisonOutcome, Side, Winner};
use crate::formatting::FormattingConfig;
use crate::recommendation::{messages, summarize, Recommendation};
use crate::vehicle::VehicleRecord;

pub use markdown::format_markdown;
pub use terminal::format_terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub first: Recommendation,
    pub second: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub metadata: ReportMetadata,
    pub first: VehicleRecord,
    pub second: VehicleRecord,
    pub outcomes: Vec<ComparisonOutcome>,
    pub verdict: AggregateVerdict,
    pub recommendations: Recommendations,
    pub considerations: Vec<String>,
}

impl ComparisonReport {
    pub fn vehicle(&self, side: Side) -> &VehicleRecord {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn recommendation(&self, side: Side) -> &Recommendation {
        match side {
            Side::First => &self.recommendations.first,
            Side::Second => &self.recommendations.second,
        }
    }

    /// Display name of the overall winner, `None` on a tie
    pub fn winner_name(&self) -> Option<String> {
        match self.verdict.winner {
            Winner::First => Some(self.first.display_name()),
            Winner::Second => Some(self.second.display_name()),
            Winner::Tie => None,
        }
    }
}

/// Run compare, tally and summarize for both sides.
pub fn build_report(
    first: &VehicleRecord,
    second: &VehicleRecord,
    metrics: &[ComparisonMetric],
) -> ComparisonReport {
    build_report_at(first, second, metrics, Utc::now())
}

/// [`build_report`] with a fixed timestamp
pub fn build_report_at(
    first: &VehicleRecord,
    second: &VehicleRecord,
    metrics: &[ComparisonMetric],
    generated_at: DateTime<Utc>,
) -> ComparisonReport {
    let outcomes = compare(first, second, metrics);
    let verdict = tally(&outcomes);
    debug!(
        first_wins = verdict.first_wins,
        second_wins = verdict.second_wins,
        ties = verdict.ties,
        "comparison tallied"
    );

    let recommend = |side: Side, own: &VehicleRecord, other: &VehicleRecord| {
        let (own_wins, other_wins) = verdict.wins_for(side);
        summarize(own, own_wins, other_wins, own.price, other.price)
    };

    ComparisonReport {
        metadata: ReportMetadata {
            generated_at,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        first: first.clone(),
        second: second.clone(),
        recommendations: Recommendations {
            first: recommend(Side::First, first, second),
            second: recommend(Side::Second, second, first),
        },
        outcomes,
        verdict,
        considerations: messages::considerations(),
    }
}

/// Render a report in the requested format
pub fn render(
    report: &ComparisonReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> crate::errors::Result<String> {
    Ok(match format {
        OutputFormat::Terminal => format_terminal(report, formatting),
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}
