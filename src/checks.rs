//! Content and ordering assertions over a transcript.
//!
//! Each check returns `Result<(), CheckFailure>`; nothing in this module
//! touches the process exit code. [`run_checks`] sequences the checks
//! fail-fast and records the outcome in a [`Report`] for the binary to
//! render at the outermost layer.

use serde::Serialize;
use std::fmt;

use crate::rules::{OrderRule, ARTIST_ID_EXPECTED, ARTIST_ID_TARGET, ORDER_RULES};
use crate::transcript::{FoundLine, Transcript};

/// A failed assertion. `Display` is the single diagnostic line the grader
/// prints; the wording is load-bearing (grading harnesses match on it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckFailure {
    /// No line contains `needle`.
    MissingLine { needle: String },
    /// The first line containing `second` comes strictly before the first
    /// line containing `first`.
    OutOfOrder { first: String, second: String },
    /// The target artist's line does not carry the expected id.
    MissingArtistId { line: String },
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLine { needle } => {
                write!(f, "{} should be in the output, but it was not", needle)
            }
            Self::OutOfOrder { first, second } => {
                write!(f, "\"{}\" should be printed before \"{}\"", first, second)
            }
            Self::MissingArtistId { line } => write!(
                f,
                "The ArtistId of {} ({}) should be included, but the line was \"{}\"",
                ARTIST_ID_TARGET, ARTIST_ID_EXPECTED, line
            ),
        }
    }
}

/// Outcome of a single check within a run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    pub name: String,
    pub passed: bool,
    /// The diagnostic for a failed check; `None` when it passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Fail-fast record of a full run.
///
/// Checks that never ran because an earlier one failed do not appear in
/// `checks`; at most one record is a failure, and it is always the last.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub passed: bool,
    pub checks: Vec<CheckRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<CheckFailure>,
}

/// Require that the first line containing `rule.first` comes before the
/// first line containing `rule.second`.
///
/// The comparison fails only when `second` is found strictly earlier; two
/// needles resolving to the same line pass.
pub fn check_order(transcript: &Transcript, rule: &OrderRule) -> Result<(), CheckFailure> {
    let first = require_line(transcript, rule.first)?;
    let second = require_line(transcript, rule.second)?;

    if second.index < first.index {
        return Err(CheckFailure::OutOfOrder {
            first: rule.first.to_string(),
            second: rule.second.to_string(),
        });
    }
    Ok(())
}

/// Require that the [`ARTIST_ID_TARGET`] line also contains
/// [`ARTIST_ID_EXPECTED`].
pub fn check_artist_id(transcript: &Transcript) -> Result<(), CheckFailure> {
    let found = require_line(transcript, ARTIST_ID_TARGET)?;

    if !found.text.contains(ARTIST_ID_EXPECTED) {
        return Err(CheckFailure::MissingArtistId {
            line: found.text.to_string(),
        });
    }
    Ok(())
}

/// Find the first line containing `needle`, or fail the check. A missing
/// line is fatal to the whole run: the calling check cannot proceed.
fn require_line<'a>(
    transcript: &'a Transcript,
    needle: &str,
) -> Result<FoundLine<'a>, CheckFailure> {
    transcript
        .find_line(needle)
        .ok_or_else(|| CheckFailure::MissingLine {
            needle: needle.to_string(),
        })
}

/// Run every check in the grader's fixed sequence, stopping at the first
/// failure: the id check, then the ordering rules in table order.
pub fn run_checks(transcript: &Transcript) -> Report {
    let mut report = Report {
        passed: true,
        checks: Vec::new(),
        failure: None,
    };

    if !record(
        &mut report,
        format!("ArtistId of {}", ARTIST_ID_TARGET),
        check_artist_id(transcript),
    ) {
        return report;
    }

    for rule in ORDER_RULES {
        if !record(
            &mut report,
            format!("{} before {}", rule.first, rule.second),
            check_order(transcript, rule),
        ) {
            return report;
        }
    }

    report
}

/// Append `outcome` to the report; returns false when the run must stop.
fn record(report: &mut Report, name: String, outcome: Result<(), CheckFailure>) -> bool {
    match outcome {
        Ok(()) => {
            report.checks.push(CheckRecord {
                name,
                passed: true,
                message: None,
            });
            true
        }
        Err(failure) => {
            report.checks.push(CheckRecord {
                name,
                passed: false,
                message: Some(failure.to_string()),
            });
            report.passed = false;
            report.failure = Some(failure);
            false
        }
    }
}
