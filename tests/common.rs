//! Common test helpers for end-to-end grader runs

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the gradecheck binary with `args`, feeding `input` on stdin, and
/// wait for it to finish.
pub fn run_gradecheck(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gradecheck"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn gradecheck");

    child
        .stdin
        .as_mut()
        .expect("no stdin handle")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child
        .wait_with_output()
        .expect("failed to wait for gradecheck")
}

/// A transcript that satisfies every check: alphabetical Chinook output
/// with Metallica's ArtistId on its line.
pub fn passing_transcript() -> &'static str {
    "AC/DC (1)\n\
     Aaron Copland & London Symphony Orchestra (230)\n\
     Aaron Goldberg (202)\n\
     Alanis Morissette (4)\n\
     Metallica (50)\n"
}
