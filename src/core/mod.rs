//! core
//!
//! Core domain types and operations for Linkweb.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PageName
//! - [`graph`] - Page graph representation and reachability
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The graph owns all pages; links are handles into the same arena, so
//!   they cannot dangle

pub mod graph;
pub mod types;
