//! CLI entry point for gradecheck.

mod cli;

use anyhow::Result;
use clap::Parser;
use std::io;

use cli::Cli;
use gradecheck::checks;
use gradecheck::report;
use gradecheck::transcript::Transcript;

fn main() -> Result<()> {
    // Grading harnesses match diagnostics byte-for-byte; keep piped output
    // free of ANSI codes.
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let transcript = match &cli.input {
        Some(path) if path.as_os_str() != "-" => Transcript::load(path)?,
        _ => Transcript::from_reader(io::stdin().lock())?,
    };

    let report = checks::run_checks(&transcript);

    match cli.format.as_str() {
        "text" => {
            if cli.verbose {
                report::print_verbose(&report);
            } else {
                report::print_text(&report);
            }
        }
        "json" => report::print_json(&report)?,
        other => anyhow::bail!("Unknown format: {} (expected text or json)", other),
    }

    // The exit decision lives here, at the outermost layer; check logic
    // never terminates the process.
    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}
