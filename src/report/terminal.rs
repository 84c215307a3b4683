use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::comparison::{ComparisonOutcome, Side, Winner};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};

use super::ComparisonReport;

fn value_cell(value: &str, won: bool, styled: bool) -> Cell {
    let cell = Cell::new(value);
    if won && styled {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn marker(outcome: &ComparisonOutcome, formatter: &dyn OutputFormatter) -> String {
    match outcome.winner {
        Winner::First => formatter.emoji("◀", "<"),
        Winner::Second => formatter.emoji("▶", ">"),
        Winner::Tie => "=".to_string(),
    }
}

fn scorecard(report: &ComparisonReport, formatting: FormattingConfig) -> Table {
    let styled = formatting.color.should_use_color();
    let formatter = formatter_for(formatting);

    let mut table = Table::new();
    if formatting.emoji.should_use_emoji() {
        table.load_preset(UTF8_FULL);
    } else {
        table.load_preset(ASCII_FULL);
    }
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new(report.first.display_name()).add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(report.second.display_name()).add_attribute(Attribute::Bold),
        ]);

    for outcome in &report.outcomes {
        table.add_row(vec![
            Cell::new(&outcome.category),
            value_cell(&outcome.first_value, outcome.winner == Winner::First, styled),
            Cell::new(marker(outcome, formatter.as_ref())).set_alignment(CellAlignment::Center),
            value_cell(&outcome.second_value, outcome.winner == Winner::Second, styled),
        ]);
    }

    table
}

/// Render a report as a terminal scorecard
pub fn format_terminal(report: &ComparisonReport, formatting: FormattingConfig) -> String {
    let formatter = formatter_for(formatting);
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} vs {}\n\n",
        formatter.emoji("🚗", ">>"),
        formatter.header(&report.first.to_string()),
        formatter.header(&report.second.to_string())
    ));
    out.push_str(&scorecard(report, formatting).to_string());
    out.push_str("\n\n");

    let verdict = &report.verdict;
    let winner = match report.winner_name() {
        Some(name) => formatter.win(&name),
        None => formatter.neutral("Tie"),
    };
    out.push_str(&format!(
        "{} {}  ({}-{}, {} ties)\n\n",
        formatter.bold("Winner:"),
        winner,
        verdict.first_wins,
        verdict.second_wins,
        verdict.ties
    ));

    out.push_str(&format!("{}\n", formatter.header("Recommendations")));
    for side in [Side::First, Side::Second] {
        let recommendation = report.recommendation(side);
        out.push_str(&format!(
            "  {}: {}\n",
            formatter.bold(&report.vehicle(side).display_name()),
            recommendation.message
        ));
        for highlight in &recommendation.highlights {
            out.push_str(&format!("    {} {}\n", formatter.emoji("✓", "+"), highlight));
        }
    }

    out.push_str(&format!("\n{}\n", formatter.header("Considerations")));
    for note in &report.considerations {
        out.push_str(&format!("  {} {}\n", formatter.warning("!"), formatter.dim(note)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::reference_metrics;
    use crate::report::build_report;
    use crate::vehicle::fixtures::{sedan_a, sedan_b};

    #[test]
    fn plain_scorecard_uses_ascii_markers() {
        let report = build_report(&sedan_a(), &sedan_b(), &reference_metrics("€"));
        let out = format_terminal(&report, FormattingConfig::plain());

        assert!(out.starts_with(">> BMW Serie 3 (2023) vs Mercedes Classe C (2023)"));
        assert!(out.contains("€45,000"));
        assert!(out.contains("6.2 L/100km"));
        assert!(out.contains("Winner: BMW Serie 3  (6-0, 0 ties)"));
        assert!(out.contains("    + Strong performance"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn tie_is_reported_without_a_name() {
        let a = sedan_a();
        let mut b = sedan_a();
        b.id = "bmw-clone".into();
        b.brand = "Clone".into();
        let report = build_report(&a, &b, &reference_metrics("€"));
        let out = format_terminal(&report, FormattingConfig::plain());
        assert!(out.contains("Winner: Tie  (0-0, 6 ties)"));
    }
}
