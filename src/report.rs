//! Report formatting.
//!
//! Renders a completed analysis as a human-readable text report. Error
//! rendering is left to the caller: on failure the error's `Display` output
//! is the message the user sees.

use std::fmt::Write;

use crate::AnalysisReport;

/// Formats an analysis report for display.
///
/// Lists the title, the source URL, and the ranked words as
/// `rank. word : count` rows.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Title: {}", report.title);
    let _ = writeln!(out, "URL: {}", report.url);
    let _ = writeln!(out);
    let _ = writeln!(out, "Top {} Words:", report.top_n);
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (rank, entry) in report.entries.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {:15} : {:5}", rank + 1, entry.word, entry.count);
    }

    out
}
