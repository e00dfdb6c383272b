//! Formatted terminal output.
//!
//! The digest is a golden-output surface: every value is printed with exactly
//! two decimals and the line layout never changes between runs.

use crate::domain::GrowthSummary;

/// Format the run digest: a header line plus four summary lines.
pub fn format_digest(summary: &GrowthSummary, period: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== MRR Growth {period} Summary ===\n"));
    out.push_str(&format!(
        "Average growth: {:.2} (required: {:.2}, gap: {:.2})\n",
        summary.average_growth, summary.target, summary.average_gap
    ));
    out.push_str(&format!(
        "Best quarter: {} at {:.2}\n",
        summary.max.quarter, summary.max.value
    ));
    out.push_str(&format!(
        "Lowest quarter: {} at {:.2}\n",
        summary.min.quarter, summary.min.value
    ));
    out.push_str(&format!(
        "Latest quarter ({}): {:.2}",
        summary.latest.quarter, summary.latest.value
    ));

    out
}
