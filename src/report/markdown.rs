use crate::comparison::{Side, Winner};

use super::ComparisonReport;

fn winner_label(report: &ComparisonReport, winner: Winner) -> String {
    match winner {
        Winner::First => report.first.display_name(),
        Winner::Second => report.second.display_name(),
        Winner::Tie => "Tie".to_string(),
    }
}

/// Escape text for use inside a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render a report as a markdown document
pub fn format_markdown(report: &ComparisonReport) -> String {
    let mut md = String::new();
    let first = report.first.display_name();
    let second = report.second.display_name();

    md.push_str(&format!("# {} vs {}\n\n", first, second));
    md.push_str(&format!(
        "**Generated**: {} (autocompare {})\n\n",
        report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.metadata.tool_version
    ));

    md.push_str("## Verdict\n\n");
    match report.winner_name() {
        Some(name) => md.push_str(&format!("**Winner**: {}\n\n", name)),
        None => md.push_str("**Winner**: Tie\n\n"),
    }
    md.push_str(&format!(
        "- {}: {} wins\n- {}: {} wins\n- Ties: {}\n\n",
        first, report.verdict.first_wins, second, report.verdict.second_wins, report.verdict.ties
    ));

    md.push_str("## Scorecard\n\n");
    md.push_str(&format!(
        "| Metric | {} | {} | Winner |\n",
        cell(&first),
        cell(&second)
    ));
    md.push_str("|--------|------|------|--------|\n");
    for outcome in &report.outcomes {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            cell(&outcome.category),
            cell(&outcome.first_value),
            cell(&outcome.second_value),
            cell(&winner_label(report, outcome.winner))
        ));
    }
    md.push('\n');

    md.push_str("## Recommendations\n\n");
    for side in [Side::First, Side::Second] {
        let recommendation = report.recommendation(side);
        md.push_str(&format!("### {}\n\n", report.vehicle(side).display_name()));
        md.push_str(&format!("{}\n\n", recommendation.message));
        for highlight in &recommendation.highlights {
            md.push_str(&format!("- {}\n", highlight));
        }
        if !recommendation.highlights.is_empty() {
            md.push('\n');
        }
    }

    md.push_str("## Considerations\n\n");
    for note in &report.considerations {
        md.push_str(&format!("- {}\n", note));
    }

    md
}
