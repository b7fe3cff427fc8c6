//! Critical-edge (bridge) finding for undirected graphs.
//!
//! A bridge is an edge whose removal increases the number of connected
//! components. The finder runs a single DFS from node 1, tracking each
//! node's discovery order and low-link value: when a finished child
//! cannot reach its parent's discovery order or earlier, the tree edge
//! between them is a bridge.
//!
//! The traversal uses an explicit stack rather than recursion, so path
//! graphs of arbitrary depth cannot overflow the call stack. Back-edge
//! detection compares edge ids rather than node ids, which makes
//! parallel edges between the same pair behave correctly (a duplicated
//! edge is never a bridge).

use tracing::{instrument, warn};

/// Errors returned while searching for bridges.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The caller asked for bridges of a graph with no nodes.
    #[error("cannot find bridges in a graph with no nodes")]
    EmptyGraph,
    /// An edge referenced a node label outside `[1, node_count]`.
    #[error("edge references node {node}, but labels must lie in [1, {node_count}]")]
    NodeOutOfRange {
        /// The offending node label as provided.
        node: usize,
        /// The declared number of nodes.
        node_count: usize,
    },
}

impl BridgeError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> BridgeErrorCode {
        match self {
            Self::EmptyGraph => BridgeErrorCode::EmptyGraph,
            Self::NodeOutOfRange { .. } => BridgeErrorCode::NodeOutOfRange,
        }
    }
}

/// Machine-readable error codes for [`BridgeError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BridgeErrorCode {
    /// The caller asked for bridges of a graph with no nodes.
    EmptyGraph,
    /// An edge referenced a node label outside the declared range.
    NodeOutOfRange,
}

impl BridgeErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::NodeOutOfRange => "NODE_OUT_OF_RANGE",
        }
    }
}

/// A DFS frame: the node being expanded, the id of the tree edge that
/// reached it, and a cursor into its neighbour list.
struct Frame {
    node: usize,
    incoming_edge: Option<usize>,
    next_neighbour: usize,
}

/// Finds the bridges of an undirected graph.
///
/// Node labels are 1-indexed in both input and output. The DFS starts at
/// node 1; nodes unreachable from it are skipped (a structured warning
/// reports how many) and cannot contribute bridges. Each bridge is
/// reported once, as a `(discoverer, ancestor)` pair in DFS completion
/// order — the orientation need not match the input edge.
///
/// # Errors
///
/// Returns [`BridgeError::EmptyGraph`] when `node_count` is zero and
/// [`BridgeError::NodeOutOfRange`] when an edge references a label
/// outside `[1, node_count]`.
///
/// # Examples
/// ```
/// use abacus_core::find_bridges;
///
/// let bridges = find_bridges(&[(1, 2), (1, 3), (3, 4), (1, 4), (4, 5)], 5)?;
/// assert_eq!(bridges, vec![(2, 1), (5, 4)]);
/// # Ok::<(), abacus_core::BridgeError>(())
/// ```
#[instrument(
    name = "bridges.find",
    err,
    skip(edges),
    fields(edge_count = edges.len())
)]
pub fn find_bridges(
    edges: &[(usize, usize)],
    node_count: usize,
) -> Result<Vec<(usize, usize)>, BridgeError> {
    if node_count == 0 {
        return Err(BridgeError::EmptyGraph);
    }

    let adjacency = build_adjacency(edges, node_count)?;

    // Discovery order per node, 0 meaning unvisited; low-link per node.
    let mut discovery = vec![0_usize; node_count];
    let mut low = vec![0_usize; node_count];
    let mut clock = 0_usize;
    let mut bridges = Vec::new();

    let mut stack = Vec::new();
    clock += 1;
    discovery[0] = clock;
    low[0] = clock;
    stack.push(Frame {
        node: 0,
        incoming_edge: None,
        next_neighbour: 0,
    });

    while let Some(top) = stack.last_mut() {
        let node = top.node;
        if let Some(&(neighbour, edge_id)) = adjacency[node].get(top.next_neighbour) {
            top.next_neighbour += 1;
            // Skip only the tree edge we arrived by; a parallel edge to
            // the parent has a different id and counts as a back-edge.
            if top.incoming_edge == Some(edge_id) {
                continue;
            }
            if discovery[neighbour] == 0 {
                clock += 1;
                discovery[neighbour] = clock;
                low[neighbour] = clock;
                stack.push(Frame {
                    node: neighbour,
                    incoming_edge: Some(edge_id),
                    next_neighbour: 0,
                });
            } else {
                low[node] = low[node].min(low[neighbour]);
            }
        } else {
            stack.pop();
            if let Some(parent) = stack.last() {
                // The child's subtree is complete: if it cannot reach the
                // parent's discovery order or earlier, the tree edge
                // between them is critical.
                if low[node] > discovery[parent.node] {
                    bridges.push((node + 1, parent.node + 1));
                }
                low[parent.node] = low[parent.node].min(low[node]);
            }
        }
    }

    let unvisited = discovery.iter().filter(|&&order| order == 0).count();
    if unvisited > 0 {
        warn!(
            unvisited,
            node_count, "nodes unreachable from node 1 were not examined"
        );
    }

    Ok(bridges)
}

/// Builds the 0-indexed adjacency structure, inserting every edge in
/// both directions and tagging each entry with its edge id.
fn build_adjacency(
    edges: &[(usize, usize)],
    node_count: usize,
) -> Result<Vec<Vec<(usize, usize)>>, BridgeError> {
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); node_count];
    for (edge_id, &(left, right)) in edges.iter().enumerate() {
        for node in [left, right] {
            if node == 0 || node > node_count {
                return Err(BridgeError::NodeOutOfRange { node, node_count });
            }
        }
        adjacency[left - 1].push((right - 1, edge_id));
        adjacency[right - 1].push((left - 1, edge_id));
    }
    Ok(adjacency)
}
