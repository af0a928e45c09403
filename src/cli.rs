//! CLI argument definitions for gradecheck.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradecheck")]
#[command(version)]
#[command(about = "Output checks for the artist listing exercise", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    java ArtistAppMain | gradecheck       Grade a live run from stdin\n    gradecheck output.txt --verbose        Re-grade a saved transcript\n\n    Exit code 0 means every check passed (silent by default); the first\n    failing check prints one diagnostic line and exits 1."
)]
pub struct Cli {
    /// Read the program output from FILE instead of standard input
    /// ("-" means standard input)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print a per-check report (default is silent on success)
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}
