//! Linkweb - a line-oriented interpreter for page link graphs
//!
//! Linkweb is a single-binary tool that reads a stream of commands, builds an
//! in-memory directed graph of named pages, and answers reachability queries
//! between them:
//!
//! - `@addPages <name> [<name> ...]` registers pages
//! - `@addLinks <source> <target> [<target> ...]` registers directed links
//! - `@isConnected <source> <target>` prints `1` or `0`
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, selects the input
//!   stream, delegates to the interpreter)
//! - [`interp`] - The interpreter: tokenization, command recognition, and
//!   per-run session state
//! - [`core`] - Domain types and the page graph
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Linkweb maintains the following invariants:
//!
//! 1. Page names are unique within a run; duplicate registration never
//!    replaces the original page
//! 2. A (source, target) link pair exists at most once; outgoing links keep
//!    insertion order
//! 3. Reachability queries never interfere with one another: visited state
//!    is scoped to a single query
//! 4. Command errors never abort the run; the process exit code reports
//!    whether any error was ever seen

pub mod cli;
pub mod core;
pub mod interp;
pub mod ui;
