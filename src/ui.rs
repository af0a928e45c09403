//! Centralized UI formatting and color utilities
//!
//! This module provides the icons and color helpers used by the verbose
//! report. Default (non-verbose) output stays uncolored plain text so that
//! grading harnesses can match diagnostics byte-for-byte.

use colored::{ColoredString, Colorize};

/// Icon for a check outcome: ● (green) for pass, ✗ (red) for fail.
pub fn outcome_icon(passed: bool) -> ColoredString {
    if passed {
        "●".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for report text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for passing runs
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for diagnostics
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
