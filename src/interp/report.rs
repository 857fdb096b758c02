//! interp::report
//!
//! Machine-readable run summary for `--json` mode.

use serde::Serialize;

use crate::core::graph::PageGraph;

/// One page and its outgoing links, by name.
#[derive(Debug, Serialize)]
pub struct PageRecord {
    pub name: String,
    pub links: Vec<String>,
}

/// One valid reachability query and its answer.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRecord {
    pub from: String,
    pub to: String,
    pub connected: bool,
}

/// Summary of a whole run: the final graph, every valid query, and whether
/// any command error was seen.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub pages: Vec<PageRecord>,
    pub queries: Vec<QueryRecord>,
    pub errors_seen: bool,
}

impl RunReport {
    /// Build a report from the end-of-run session state.
    pub fn new(graph: &PageGraph, queries: &[QueryRecord], errors_seen: bool) -> Self {
        let pages = graph
            .pages()
            .map(|page| PageRecord {
                name: page.name().to_string(),
                links: page
                    .outgoing()
                    .iter()
                    .map(|&id| graph.page(id).name().to_string())
                    .collect(),
            })
            .collect();

        Self {
            pages,
            queries: queries.to_vec(),
            errors_seen,
        }
    }
}
