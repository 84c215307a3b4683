//! Rendering of a depreciation projection and its curve analysis.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use crate::comparison::metric::group_thousands;
use crate::depreciation::curve::{analyze, CurveAnalysis, HoldAdvice};
use crate::depreciation::{project, DepreciationModel, Projection, ProjectionRequest};
use crate::errors::Result;
use crate::formatting::{formatter_for, FormattingConfig};

use super::OutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub request: ProjectionRequest,
    pub projection: Projection,
    pub analysis: CurveAnalysis,
}

/// Project and analyze in one step
pub fn build_projection_report(
    request: ProjectionRequest,
    model: &DepreciationModel,
) -> Result<ProjectionReport> {
    let projection = project(&request, model)?;
    let analysis = analyze(&projection);
    Ok(ProjectionReport {
        request,
        projection,
        analysis,
    })
}

pub fn advice_text(advice: HoldAdvice) -> String {
    match advice {
        HoldAdvice::HoldUntil(year) => format!(
            "Yearly loss drops below 5% in {}; keeping the vehicle at least until then is the most economical option.",
            year
        ),
        HoldAdvice::Significant(year) => format!(
            "Yearly loss drops below 8% in {} but stays significant afterwards.",
            year
        ),
        HoldAdvice::SustainedLoss => {
            "Yearly loss stays high over the whole period; consider the total cost of ownership carefully.".to_string()
        }
    }
}

fn money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, group_thousands(value.round()))
}

fn optional_pct(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}%", v)).unwrap_or_else(|| "-".to_string())
}

pub fn format_projection_terminal(
    report: &ProjectionReport,
    currency_symbol: &str,
    formatting: FormattingConfig,
) -> String {
    let formatter = formatter_for(formatting);
    let mut table = Table::new();
    if formatting.emoji.should_use_emoji() {
        table.load_preset(UTF8_FULL);
    } else {
        table.load_preset(ASCII_FULL);
    }
    if formatting.color.should_use_color() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["Year", "Km", "Value", "Cumulative", "Yearly loss", "Yearly %"]
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for point in &report.projection.points {
        table.add_row(vec![
            Cell::new(point.year),
            Cell::new(group_thousands(point.km.round())).set_alignment(CellAlignment::Right),
            Cell::new(money(currency_symbol, point.value)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", point.cumulative_depreciation))
                .set_alignment(CellAlignment::Right),
            Cell::new(
                point
                    .annual_loss
                    .map(|loss| money(currency_symbol, loss))
                    .unwrap_or_else(|| "-".to_string()),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(optional_pct(point.annual_loss_pct)).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", formatter.header("Depreciation projection")));
    out.push_str(&table.to_string());
    out.push_str("\n\n");
    out.push_str(&format_analysis_lines(report, currency_symbol));
    out.push_str(&format!(
        "\n{} {}\n",
        formatter.bold("Advice:"),
        advice_text(report.analysis.advice)
    ));
    out
}

fn format_analysis_lines(report: &ProjectionReport, currency_symbol: &str) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    for crossing in &analysis.crossings {
        let when = crossing
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "not reached".to_string());
        out.push_str(&format!(
            "- Yearly loss below {}%: {}\n",
            crossing.threshold, when
        ));
    }
    if let Some(slowdown) = analysis.slowdown {
        out.push_str(&format!(
            "- Steepest slowdown: {} ({:.1}% -> {:.1}%)\n",
            slowdown.year, slowdown.from_pct, slowdown.to_pct
        ));
    }
    out.push_str(&format!(
        "- Total loss over the period: {} ({:.1}%)\n",
        money(currency_symbol, analysis.period.amount),
        analysis.period.percent
    ));
    if analysis.flattening {
        out.push_str("- The curve flattens markedly over the period\n");
    }
    out
}

pub fn format_projection_markdown(report: &ProjectionReport, currency_symbol: &str) -> String {
    let mut md = String::new();
    md.push_str("# Depreciation Projection\n\n");
    md.push_str(&format!(
        "**List price**: {}\n\n",
        money(currency_symbol, report.projection.list_price)
    ));

    md.push_str("| Year | Km | Value | Cumulative | Yearly loss | Yearly % |\n");
    md.push_str("|------|----|-------|------------|-------------|----------|\n");
    for point in &report.projection.points {
        md.push_str(&format!(
            "| {} | {} | {} | {:.1}% | {} | {} |\n",
            point.year,
            group_thousands(point.km.round()),
            money(currency_symbol, point.value),
            point.cumulative_depreciation,
            point
                .annual_loss
                .map(|loss| money(currency_symbol, loss))
                .unwrap_or_else(|| "-".to_string()),
            optional_pct(point.annual_loss_pct)
        ));
    }

    md.push_str("\n## Curve Analysis\n\n");
    md.push_str(&format_analysis_lines(report, currency_symbol));
    md.push_str(&format!("\n**Advice**: {}\n", advice_text(report.analysis.advice)));
    md
}

pub fn render_projection(
    report: &ProjectionReport,
    format: OutputFormat,
    currency_symbol: &str,
    formatting: FormattingConfig,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Terminal => format_projection_terminal(report, currency_symbol, formatting),
        OutputFormat::Markdown => format_projection_markdown(report, currency_symbol),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectionReport {
        build_projection_report(
            ProjectionRequest {
                list_price: 30_000.0,
                current_depreciation: 10.0,
                current_km: 0.0,
                annual_km: 10_000.0,
                base_year: 2024,
                years: 5,
            },
            &DepreciationModel::default(),
        )
        .unwrap()
    }

    #[test]
    fn markdown_has_one_row_per_point() {
        let report = sample();
        let md = format_projection_markdown(&report, "€");
        assert!(md.contains("**List price**: €30,000"));
        assert!(md.contains("| 2024 | 0 | €27,000 | 10.0% | - | - |"));
        assert_eq!(md.matches("\n| 20").count(), 6);
        assert!(md.contains("**Advice**:"));
    }

    #[test]
    fn terminal_output_lists_thresholds() {
        let out = format_projection_terminal(&sample(), "$", FormattingConfig::plain());
        assert!(out.contains("Yearly loss below 8%"));
        assert!(out.contains("$27,000"));
        assert!(out.contains("Advice:"));
    }

    #[test]
    fn json_carries_request_and_analysis() {
        let json = render_projection(&sample(), OutputFormat::Json, "€", FormattingConfig::plain())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["request"]["years"], 5);
        assert_eq!(value["projection"]["points"].as_array().unwrap().len(), 6);
        assert!(value["analysis"]["advice"]["kind"].is_string());
    }

    #[test]
    fn advice_names_the_year() {
        assert!(advice_text(HoldAdvice::HoldUntil(2029)).contains("2029"));
    }
}
