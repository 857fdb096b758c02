//! interp
//!
//! The command interpreter: per-run session state and the line loop.
//!
//! # Modules
//!
//! - [`tokenize`] - Whitespace tokenization with the token length cap
//! - [`command`] - Command keyword recognition
//! - [`report`] - Machine-readable run summary
//!
//! # Architecture
//!
//! A [`Session`] holds everything one run mutates: the page graph, the
//! monotonic error flag, and the log of answered queries. The CLI layer
//! selects the input stream and drives [`Session::run`]; all graph
//! mutation happens here.
//!
//! Command errors are reported to stderr and recorded in the error flag,
//! then the run continues. Only I/O failures on the streams themselves
//! abort a run.

pub mod command;
pub mod report;
pub mod tokenize;

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};

use crate::core::graph::PageGraph;
use crate::core::types::PageName;
use crate::ui::output::{self, Verbosity};
use command::Keyword;
use report::{QueryRecord, RunReport};

/// How query answers are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print each answer as a bare `1`/`0` line as the query executes.
    Plain,
    /// Collect answers and emit one JSON report at end of run.
    Json,
}

/// Per-run interpreter state.
///
/// Generic over the output sink so tests can capture what a run prints.
pub struct Session<W> {
    graph: PageGraph,
    err_seen: bool,
    queries: Vec<QueryRecord>,
    mode: OutputMode,
    verbosity: Verbosity,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with an empty graph and a clear error flag.
    pub fn new(mode: OutputMode, verbosity: Verbosity, out: W) -> Self {
        Self {
            graph: PageGraph::new(),
            err_seen: false,
            queries: Vec::new(),
            mode,
            verbosity,
            out,
        }
    }

    /// Whether any command-level error has been observed.
    ///
    /// The flag is monotonic: once set it never clears.
    pub fn errors_seen(&self) -> bool {
        self.err_seen
    }

    /// The graph built so far.
    pub fn graph(&self) -> &PageGraph {
        &self.graph
    }

    /// Report a command error to stderr and set the error flag.
    pub fn report_error(&mut self, message: impl Display) {
        output::error(message);
        self.err_seen = true;
    }

    /// Process a full input stream, one command per line, to EOF.
    ///
    /// # Errors
    ///
    /// Fails only on stream I/O errors; command errors are recorded in the
    /// error flag and processing continues.
    pub fn run(&mut self, reader: impl BufRead) -> Result<()> {
        for line in reader.lines() {
            let line = line.context("failed to read input")?;
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Execute one line: classify the first token and dispatch on it.
    ///
    /// Blank lines are no-ops. Only the first token is checked against the
    /// keyword set; the rest of the line is the command's argument blob.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        let Some((head, rest)) = tokenize::split_command(line) else {
            return Ok(());
        };

        match Keyword::parse(head) {
            None => self.report_error(format!("Bad command: {head}")),
            Some(Keyword::AddPages) => self.add_pages(rest),
            Some(Keyword::AddLinks) => self.add_links(rest),
            Some(Keyword::IsConnected) => {
                if let Some(connected) = self.is_connected(rest) {
                    if self.mode == OutputMode::Plain {
                        writeln!(self.out, "{}", if connected { 1 } else { 0 })
                            .context("failed to write query result")?;
                    }
                }
            }
        }
        Ok(())
    }

    /// `@addPages` - register every name in the argument blob, in order.
    fn add_pages(&mut self, args: &str) {
        for token in tokenize::tokens(args) {
            let name = match PageName::new(token) {
                Ok(name) => name,
                Err(err) => {
                    self.report_error(err);
                    continue;
                }
            };
            match self.graph.add_page(name) {
                Ok(_) => output::debug(format!("registered page {token}"), self.verbosity),
                // "{name} added twice"; the original registration is kept.
                Err(err) => self.report_error(err),
            }
        }
    }

    /// `@addLinks` - the blob's first token is the source page, the rest
    /// are link targets.
    ///
    /// An unknown target skips that target only; the remaining targets in
    /// the same command are still attempted. Re-registering an existing
    /// (source, target) pair is a silent no-op.
    fn add_links(&mut self, args: &str) {
        let mut names = tokenize::tokens(args);

        let Some(source) = names.next() else {
            self.report_error("No source page given");
            return;
        };
        let Some(from) = self.graph.page_id(source) else {
            self.report_error(format!("Source page {source} doesn't exist"));
            return;
        };

        for target in names {
            let Some(to) = self.graph.page_id(target) else {
                self.report_error(format!("Target page {target} doesn't exist"));
                continue;
            };
            if self.graph.add_link(from, to) {
                output::debug(format!("linked {source} -> {target}"), self.verbosity);
            }
        }
    }

    /// `@isConnected` - the blob must hold exactly two registered page
    /// names. Returns the answer for a valid query, `None` for a malformed
    /// one (which is reported and counted, but prints nothing).
    fn is_connected(&mut self, args: &str) -> Option<bool> {
        let mut names = tokenize::tokens(args);

        let Some(source) = names.next() else {
            self.report_error("No from page given");
            return None;
        };
        let Some(from) = self.graph.page_id(source) else {
            self.report_error(format!("No page {source} found"));
            return None;
        };

        let Some(target) = names.next() else {
            self.report_error("No target page given");
            return None;
        };
        let Some(to) = self.graph.page_id(target) else {
            self.report_error(format!("No page {target} found"));
            return None;
        };

        if names.next().is_some() {
            self.report_error("Too many arguments to @isConnected");
            return None;
        }

        let connected = self.graph.is_reachable(from, to);
        output::debug(
            format!("query {source} -> {target}: {connected}"),
            self.verbosity,
        );
        self.queries.push(QueryRecord {
            from: source.to_string(),
            to: target.to_string(),
            connected,
        });
        Some(connected)
    }

    /// Build the machine-readable run summary.
    pub fn report(&self) -> RunReport {
        RunReport::new(&self.graph, &self.queries, self.err_seen)
    }

    /// Emit end-of-run output: the JSON report in JSON mode, and the page
    /// list at debug verbosity.
    pub fn finish(&mut self) -> Result<()> {
        if self.mode == OutputMode::Json {
            let report = self.report();
            serde_json::to_writer_pretty(&mut self.out, &report)
                .context("failed to write run report")?;
            writeln!(self.out).context("failed to write run report")?;
        }
        self.dump_graph();
        Ok(())
    }

    /// Dump the page list to stderr (debug verbosity only).
    fn dump_graph(&self) {
        for page in self.graph.pages() {
            let links: Vec<&str> = page
                .outgoing()
                .iter()
                .map(|&id| self.graph.page(id).name().as_str())
                .collect();
            output::debug(
                format!("page {}: links to [{}]", page.name(), links.join(", ")),
                self.verbosity,
            );
        }
    }
}
