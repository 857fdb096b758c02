//! ui
//!
//! Output utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity handling and stderr helpers
//!
//! # Design
//!
//! Command diagnostics are part of the interpreter's contract and always
//! go to stderr; debug traces are gated on verbosity.

pub mod output;
