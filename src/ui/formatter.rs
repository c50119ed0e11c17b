//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are unit tested; `display_*`
//! functions print it.

use std::path::Path;

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::RunReport;
use crate::self_test::SelfTestOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary lines for a finished run.
///
/// The changed-count label depends on whether changes were written.
pub fn format_summary(report: &RunReport) -> Vec<String> {
    let changed_label = if report.written {
        "Changed"
    } else {
        "Would change"
    };
    vec![
        format!("Scanned {} documents", report.scanned()),
        format!("{} {} documents", changed_label, report.changed()),
    ]
}

/// Display the scanned/changed counts of a run.
pub fn display_summary(report: &RunReport) {
    let mut lines = format_summary(report).into_iter();
    if let Some(scanned) = lines.next() {
        display_status(&scanned);
    }
    for line in lines {
        display_success(&line);
    }
}

/// Lines listing the changed document paths; empty when nothing changed.
pub fn format_changed_paths(paths: &[&Path]) -> Vec<String> {
    paths
        .iter()
        .map(|path| format!("  - {}", path.display()))
        .collect()
}

/// Display the changed document paths, one per line.
pub fn display_changed_paths(paths: &[&Path]) {
    let lines = format_changed_paths(paths);
    if lines.is_empty() {
        return;
    }
    println!("\n{}", style("Changed documents:").bold());
    for line in lines {
        println!("{}", line);
    }
}

/// One line per self-test case: marker, input, version and, on failure, the
/// expected and actual output.
pub fn format_self_test_outcome(outcome: &SelfTestOutcome) -> String {
    if outcome.passed() {
        format!("✓ {} ({})", outcome.case.input, outcome.case.version)
    } else {
        format!(
            "✗ {} ({})\n    expected: {}\n    actual:   {}",
            outcome.case.input, outcome.case.version, outcome.case.expected, outcome.actual
        )
    }
}

/// Display the marker line for a self-test case.
pub fn display_self_test_outcome(outcome: &SelfTestOutcome) {
    let line = format_self_test_outcome(outcome);
    if outcome.passed() {
        println!("{}", style(line).green());
    } else {
        println!("{}", style(line).red());
    }
}
