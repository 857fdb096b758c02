//! ui::output
//!
//! Output formatting and display.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - diagnostics only
    Normal,
    /// Debug mode - verbose stderr traces
    Debug,
}

impl Verbosity {
    /// Create verbosity from the `--debug` flag.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Report a command diagnostic to stderr (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", message);
}

/// Print a debug trace (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_maps_debug() {
        assert_eq!(Verbosity::from_flags(false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true), Verbosity::Debug);
    }
}
