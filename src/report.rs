//! Terminal and JSON rendering of a check run.
//!
//! The default text mode preserves the original grader contract exactly:
//! silence on success, one diagnostic line on stdout on failure. Verbose
//! and JSON modes add a per-check report on top without changing exit
//! semantics.

use anyhow::Result;

use crate::checks::Report;
use crate::ui;

/// Print the report in the default text mode: nothing on success, exactly
/// one diagnostic line on failure.
pub fn print_text(report: &Report) {
    if let Some(failure) = &report.failure {
        println!("{}", failure);
    }
}

/// Print a per-check report with a build header and summary line.
///
/// A failing run still emits exactly one diagnostic: the summary line at
/// the bottom; the per-check rows show names and icons only.
pub fn print_verbose(report: &Report) {
    println!(
        "{} {} ({})",
        ui::colors::heading("gradecheck"),
        env!("CARGO_PKG_VERSION"),
        ui::colors::secondary(env!("GIT_SHA")),
    );
    println!("{}", ui::colors::secondary(&ui::format::separator(40)));

    for check in &report.checks {
        println!("  {} {}", ui::outcome_icon(check.passed), check.name);
    }
    println!();

    match &report.failure {
        Some(failure) => println!("{}", ui::colors::error(&failure.to_string())),
        None => {
            let count = report.checks.len();
            println!(
                "{}",
                ui::colors::success(&format!(
                    "{} {} passed",
                    count,
                    if count == 1 { "check" } else { "checks" }
                ))
            );
        }
    }
}

/// Print the full report as pretty JSON, for CI ingestion.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
