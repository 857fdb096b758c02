//! core::graph
//!
//! Page graph representation and reachability.
//!
//! # Architecture
//!
//! The page graph is a directed graph where:
//! - Nodes are registered pages, stored in an arena in registration order
//! - Edges are outgoing links, stored per page as arena handles in
//!   insertion order
//! - A name index provides O(1) lookup from page name to handle
//!
//! # Invariants
//!
//! - Page names are unique; registering a duplicate never replaces the
//!   original page
//! - A (source, target) link pair exists at most once
//! - Pages are never removed, so a [`PageId`] stays valid for the life of
//!   the graph

use std::collections::HashMap;

use thiserror::Error;

use super::types::PageName;

/// Errors from graph mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The name is already registered; the original page is unchanged.
    #[error("{0} added twice")]
    DuplicatePage(PageName),
}

/// Stable handle to a page in a [`PageGraph`].
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(usize);

/// One named node and its outgoing links.
#[derive(Debug)]
pub struct Page {
    name: PageName,
    outgoing: Vec<PageId>,
}

impl Page {
    /// The page's name.
    pub fn name(&self) -> &PageName {
        &self.name
    }

    /// Outgoing link targets, in insertion order.
    pub fn outgoing(&self) -> &[PageId] {
        &self.outgoing
    }
}

/// The page graph.
///
/// # Example
///
/// ```
/// use linkweb::core::graph::PageGraph;
/// use linkweb::core::types::PageName;
///
/// let mut graph = PageGraph::new();
/// let a = graph.add_page(PageName::new("A").unwrap()).unwrap();
/// let b = graph.add_page(PageName::new("B").unwrap()).unwrap();
///
/// graph.add_link(a, b);
/// assert!(graph.is_reachable(a, b));
/// assert!(!graph.is_reachable(b, a));
/// ```
#[derive(Debug, Default)]
pub struct PageGraph {
    pages: Vec<Page>,
    index: HashMap<PageName, PageId>,
}

impl PageGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::DuplicatePage` if the name is already
    /// registered; the graph is left unchanged.
    pub fn add_page(&mut self, name: PageName) -> Result<PageId, GraphError> {
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicatePage(name));
        }
        let id = PageId(self.pages.len());
        self.index.insert(name.clone(), id);
        self.pages.push(Page {
            name,
            outgoing: Vec::new(),
        });
        Ok(id)
    }

    /// Look up a page handle by name.
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.index.get(name).copied()
    }

    /// Get a page by handle.
    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the graph has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages, in registration order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Register a directed link.
    ///
    /// Returns `false` and leaves the graph unchanged when the exact
    /// (from, to) pair already exists.
    pub fn add_link(&mut self, from: PageId, to: PageId) -> bool {
        let outgoing = &mut self.pages[from.0].outgoing;
        if outgoing.contains(&to) {
            return false;
        }
        outgoing.push(to);
        true
    }

    /// Whether a directed path from `from` to `to` exists.
    ///
    /// Every page is reachable from itself, even with no outgoing links.
    /// Visited state lives in a per-query scratch buffer, so queries cannot
    /// interfere with one another and cycles cannot cause non-termination.
    pub fn is_reachable(&self, from: PageId, to: PageId) -> bool {
        let mut visited = vec![false; self.pages.len()];
        self.dfs(from, to, &mut visited)
    }

    /// Depth-first search, trying outgoing links in insertion order and
    /// stopping at the first success.
    fn dfs(&self, current: PageId, target: PageId, visited: &mut [bool]) -> bool {
        if current == target {
            return true;
        }
        if visited[current.0] {
            return false;
        }
        visited[current.0] = true;

        for &next in &self.pages[current.0].outgoing {
            if self.dfs(next, target, visited) {
                return true;
            }
        }
        false
    }
}
