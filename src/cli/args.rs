//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug traces on stderr
//! - `--json`: Emit one JSON run summary instead of bare query results

use clap::Parser;
use std::path::PathBuf;

/// Linkweb - line-oriented interpreter for page link graphs
#[derive(Parser, Debug)]
#[command(name = "linkweb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command input file; reads standard input when omitted.
    ///
    /// More than one file is an excess-arguments error: it is reported,
    /// counted toward the exit code, and the run falls back to standard
    /// input.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Enable debug traces on stderr
    #[arg(long)]
    pub debug: bool,

    /// Emit one JSON run summary on stdout instead of bare query results
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdin_with_no_flags() {
        let cli = Cli::try_parse_from(["linkweb"]).unwrap();
        assert!(cli.inputs.is_empty());
        assert!(!cli.debug);
        assert!(!cli.json);
    }

    #[test]
    fn captures_all_positional_inputs() {
        let cli = Cli::try_parse_from(["linkweb", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn accepts_flags_with_a_file() {
        let cli = Cli::try_parse_from(["linkweb", "--debug", "--json", "in.txt"]).unwrap();
        assert!(cli.debug);
        assert!(cli.json);
        assert_eq!(cli.inputs.len(), 1);
    }
}
