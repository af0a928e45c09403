//! # gradecheck - Artist Listing Output Checks
//!
//! gradecheck grades the Chinook artist listing exercise. The student
//! program prints every artist as `Name (ArtistId)`, sorted by name; the
//! grading harness pipes that output into gradecheck, which applies a fixed
//! set of content and ordering assertions and fails fast on the first
//! violation.
//!
//! ## Core Concepts
//!
//! - **Transcript**: the captured program output, split into trimmed lines
//! - **Rules**: the hardcoded artist names and id the checks assert on
//! - **Checks**: content and ordering assertions that return typed failures
//! - **Report**: the fail-fast run record, rendered as text or JSON
//!
//! ## Modules
//!
//! - [`transcript`] - Input model and first-match line finding
//! - [`rules`] - The exercise's assertion constants
//! - [`checks`] - Check functions and the fail-fast runner
//! - [`report`] - Text and JSON rendering
//! - [`ui`] - Color and icon helpers for the verbose report
//!
//! ## Example
//!
//! ```
//! use gradecheck::checks;
//! use gradecheck::transcript::Transcript;
//!
//! let transcript = Transcript::parse("AC/DC (1)\nMetallica (50)");
//! let report = checks::run_checks(&transcript);
//!
//! // Two order rules reference artists missing from this transcript, so
//! // the run fails on the first of them.
//! assert!(!report.passed);
//! assert_eq!(
//!     report.failure.unwrap().to_string(),
//!     "Aaron Goldberg should be in the output, but it was not"
//! );
//! ```

pub mod checks;
pub mod report;
pub mod rules;
pub mod transcript;
pub mod ui;
