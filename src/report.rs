//! Stdout reporting for the prompt front end
//!
//! Fixed-width summary table, z/p lines with a significance verdict, and a
//! terminal bar chart of the empirical conversion rates. The significance
//! comparison against [`SIGNIFICANCE_LEVEL`] lives here, as presentation
//! logic, not in the analyzer.

use std::collections::BTreeMap;

use crate::analyzer::{GroupSummary, TestResult};
use crate::config::SIGNIFICANCE_LEVEL;
use crate::generator::Group;

/// Width of the conversion-rate bars in characters.
const BAR_WIDTH: usize = 40;

/// Per-group summary table.
pub fn format_summary_table(summaries: &BTreeMap<Group, GroupSummary>) -> String {
    let mut out = String::new();
    out.push_str("--- Conversion Summary ---\n");
    out.push_str(&format!(
        "{:<6} {:>12} {:>8} {:>10}\n",
        "Group", "Conversions", "Trials", "Rate"
    ));

    for (group, summary) in summaries {
        out.push_str(&format!(
            "{:<6} {:>12} {:>8} {:>9.4}\n",
            group.to_string(),
            summary.successes,
            summary.trials,
            summary.conversion_rate()
        ));
    }
    out
}

/// Test statistic, p-value and the verdict line.
pub fn format_test_result(result: &TestResult) -> String {
    let verdict = if result.p_value < SIGNIFICANCE_LEVEL {
        "Statistically Significant"
    } else {
        "Not Statistically Significant"
    };

    format!(
        "Z-statistic: {:.3}\nP-value: {:.3}\nResult: {} (threshold {})\n",
        result.z_score, result.p_value, verdict, SIGNIFICANCE_LEVEL
    )
}

/// Bar chart of conversion rates, one row per group, scaled to 100%.
pub fn format_rate_bars(summaries: &BTreeMap<Group, GroupSummary>) -> String {
    let mut out = String::new();
    out.push_str("Conversion Rates\n");

    for (group, summary) in summaries {
        let rate = summary.conversion_rate();
        let filled = ((rate * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(BAR_WIDTH - filled);
        out.push_str(&format!("{} |{}| {:>6.2}%\n", group, bar, rate * 100.0));
    }
    out
}

/// Print the full report to stdout.
pub fn print_report(summaries: &BTreeMap<Group, GroupSummary>, result: &TestResult) {
    println!("{}", format_summary_table(summaries));
    println!("{}", format_test_result(result));
    println!("{}", format_rate_bars(summaries));
}
