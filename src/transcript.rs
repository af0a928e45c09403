//! Captured program output, split into trimmed lines.
//!
//! The grader reads the student program's output once, up front, and every
//! check runs against that in-memory snapshot. Lines keep their original
//! order; indices are what the ordering checks compare.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// The full text of a program run, one trimmed line per input line.
///
/// Empty lines are kept so that line indices match the original output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

/// A line located by [`Transcript::find_line`]: its 0-based position in the
/// original input order, and its trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundLine<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl Transcript {
    /// Split `text` on newline boundaries, trimming leading and trailing
    /// whitespace from each line.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim().to_string()).collect(),
        }
    }

    /// Read the entire reader into a transcript.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader
            .read_to_string(&mut buf)
            .context("Failed to read program output")?;
        Ok(Self::parse(&buf))
    }

    /// Load a transcript from a saved output file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Find the first line containing `needle` as a contiguous,
    /// case-sensitive substring. Containment, not equality.
    pub fn find_line(&self, needle: &str) -> Option<FoundLine<'_>> {
        self.lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.contains(needle))
            .map(|(index, line)| FoundLine {
                index,
                text: line.as_str(),
            })
    }

    /// All lines, in original order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_trims_each_line() {
        let transcript = Transcript::parse("  AC/DC (1)  \n\tMetallica (50)\n");
        assert_eq!(transcript.lines(), &["AC/DC (1)", "Metallica (50)"]);
    }

    #[test]
    fn test_parse_keeps_empty_lines() {
        let transcript = Transcript::parse("AC/DC (1)\n\nMetallica (50)");
        assert_eq!(transcript.lines().len(), 3);
        assert_eq!(transcript.lines()[1], "");
    }

    #[test]
    fn test_parse_empty_input() {
        let transcript = Transcript::parse("");
        assert!(transcript.is_empty());
        assert!(transcript.find_line("Metallica").is_none());
    }

    #[test]
    fn test_find_line_returns_first_match() {
        let transcript = Transcript::parse("Metallica (50)\nMetallica tribute (999)");
        let found = transcript.find_line("Metallica").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.text, "Metallica (50)");
    }

    #[test]
    fn test_find_line_substring_not_equality() {
        let transcript = Transcript::parse("The artist AC/DC has id 1");
        let found = transcript.find_line("AC/DC").unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_find_line_case_sensitive() {
        let transcript = Transcript::parse("metallica (50)");
        assert!(transcript.find_line("Metallica").is_none());
    }

    #[test]
    fn test_find_line_index_counts_trimmed_lines() {
        let transcript = Transcript::parse("AC/DC (1)\n   \nMetallica (50)");
        let found = transcript.find_line("Metallica").unwrap();
        assert_eq!(found.index, 2);
    }

    #[test]
    fn test_from_reader() {
        let transcript = Transcript::from_reader(Cursor::new("AC/DC (1)\n")).unwrap();
        assert_eq!(transcript.lines(), &["AC/DC (1)"]);
    }
}
