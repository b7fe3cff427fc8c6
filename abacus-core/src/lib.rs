//! Abacus core library.
//!
//! A small collection of classical algorithms, each exposed as a pure,
//! stateless function over in-memory data:
//!
//! - [`counting_sort`] / [`counting_sort_by_key`] — stable O(n+k) sort.
//! - [`radix_sort_lsb`] — stable O(n·k) least-significant-digit radix sort.
//! - [`minimum_spanning_forest`] — Kruskal's algorithm over weighted edges.
//! - [`find_bridges`] — Tarjan's bridge finding via DFS low-link values.
//!
//! No component retains state between calls and none performs I/O; the
//! crate is usable from any context that can hand it a slice.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bridges;
mod mst;
mod sort;

pub use crate::{
    bridges::{BridgeError, BridgeErrorCode, find_bridges},
    mst::{SpanningForest, WeightedEdge, minimum_spanning_forest},
    sort::{counting_sort, counting_sort_by_key, radix_sort_lsb},
};
