//! cli
//!
//! Command-line interface layer for Linkweb.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Select the input stream (named file vs standard input)
//! - Drive the interpreter session and translate its outcome into an
//!   exit code
//!
//! The CLI layer is thin. All graph mutation flows through
//! [`crate::interp::Session`].

pub mod args;

pub use args::Cli;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context as _, Result};

use crate::interp::{OutputMode, Session};
use crate::ui::output::Verbosity;

/// Run the interpreter. Returns the process exit code.
///
/// # Errors
///
/// Fails on fatal conditions only: an unopenable named input file or an
/// I/O error on the streams. Ordinary command errors are reflected in the
/// returned exit code instead.
pub fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    let verbosity = Verbosity::from_flags(cli.debug);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };

    let stdout = io::stdout();
    let mut session = Session::new(mode, verbosity, stdout.lock());

    // Zero args: standard input. One arg: that file; an unopenable file is
    // fatal. More than one: report, count it, and fall back to standard
    // input anyway.
    match cli.inputs.as_slice() {
        [] => {
            let stdin = io::stdin();
            session.run(stdin.lock())?;
        }
        [path] => {
            let file = File::open(path).with_context(|| path.display().to_string())?;
            session.run(BufReader::new(file))?;
        }
        _ => {
            session.report_error("Too many arguments");
            let stdin = io::stdin();
            session.run(stdin.lock())?;
        }
    }

    session.finish()?;

    Ok(if session.errors_seen() { 1 } else { 0 })
}
