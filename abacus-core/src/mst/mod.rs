//! Minimum spanning forest construction (Kruskal's algorithm).
//!
//! Edges are considered in non-decreasing weight order, with ties broken
//! by input position (the sort is stable), and accepted whenever their
//! endpoints lie in different union-find components. Disconnected inputs
//! yield a spanning forest rather than a single tree.

pub(crate) mod union_find;

use tracing::instrument;

use self::union_find::DisjointSet;

/// An undirected edge between two node ids carrying a comparable weight.
///
/// Node ids are non-negative and need not be contiguous; the algorithm
/// treats the maximum endpoint as the upper bound of the id range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightedEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W> WeightedEdge<W> {
    /// Creates an edge between `source` and `target` with the given weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as provided by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as provided by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> &W { &self.weight }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning
/// tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest<W> {
    edges: Vec<WeightedEdge<W>>,
    node_count: usize,
    component_count: usize,
}

impl<W> SpanningForest<W> {
    /// Returns the accepted edges in acceptance (weight) order, each with
    /// the orientation it had in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge<W>] { &self.edges }

    /// Returns the size of the node id range `[0, max_endpoint]`, or zero
    /// for empty input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components in the resulting forest.
    ///
    /// Ids below the maximum endpoint that appear in no edge count as
    /// singleton components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are taken in non-decreasing weight order; equal-weight edges
/// keep their relative input order, which makes the selection
/// deterministic. Self-loops are never accepted (their endpoints always
/// share a component). Empty input yields an empty forest with zero
/// nodes and components.
///
/// # Examples
/// ```
/// use abacus_core::{WeightedEdge, minimum_spanning_forest};
///
/// let edges = [
///     WeightedEdge::new(0, 1, 7_u32),
///     WeightedEdge::new(1, 2, 8),
///     WeightedEdge::new(2, 4, 5),
///     WeightedEdge::new(3, 0, 5),
///     WeightedEdge::new(3, 1, 9),
///     WeightedEdge::new(4, 1, 7),
///     WeightedEdge::new(4, 3, 15),
///     WeightedEdge::new(5, 3, 6),
///     WeightedEdge::new(5, 4, 8),
///     WeightedEdge::new(6, 5, 11),
///     WeightedEdge::new(6, 4, 9),
/// ];
/// let forest = minimum_spanning_forest(&edges);
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 6);
/// let total: u32 = forest.edges().iter().map(|e| *e.weight()).sum();
/// assert_eq!(total, 39);
/// ```
#[must_use]
#[instrument(level = "debug", skip(edges), fields(edge_count = edges.len()))]
pub fn minimum_spanning_forest<W: Ord + Clone>(edges: &[WeightedEdge<W>]) -> SpanningForest<W> {
    let Some(node_count) = edges
        .iter()
        .map(|edge| edge.source.max(edge.target) + 1)
        .max()
    else {
        return SpanningForest {
            edges: Vec::new(),
            node_count: 0,
            component_count: 0,
        };
    };

    let mut ordered: Vec<WeightedEdge<W>> = edges.to_vec();
    // Stable sort: equal weights stay in input order.
    ordered.sort_by(|a, b| a.weight.cmp(&b.weight));

    let mut sets = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    for edge in ordered {
        if sets.union(edge.source, edge.target) {
            accepted.push(edge);
        }
    }

    SpanningForest {
        edges: accepted,
        node_count,
        component_count: sets.components(),
    }
}

#[cfg(test)]
mod property;
