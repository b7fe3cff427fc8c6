//! Property-based tests for Kruskal's minimum spanning forest.
//!
//! Two properties are checked over seeded random graphs:
//!
//! - **Structural invariants** — acyclicity, `edges == nodes − components`,
//!   membership of every accepted edge in the input, no self-loops.
//! - **Weight optimality** — the total weight matches an independent
//!   Kruskal oracle that orders ties canonically instead of by input
//!   position; every minimum spanning forest shares the same total.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{WeightedEdge, minimum_spanning_forest};

/// Upper bound for generated node counts.
const MAX_NODES: usize = 40;

/// Generates a random graph: a seeded node count plus edges drawn over
/// random pairs, with small weights to force plenty of ties.
fn random_graph(seed: u64) -> (usize, Vec<WeightedEdge<u32>>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let node_count = rng.gen_range(2..=MAX_NODES);
    let edge_count = rng.gen_range(0..=node_count * 3);

    let edges = (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..node_count);
            let target = rng.gen_range(0..node_count);
            let weight = rng.gen_range(0_u32..20);
            WeightedEdge::new(source, target, weight)
        })
        .collect();

    (node_count, edges)
}

/// Independent sequential Kruskal with canonical tie ordering, used as a
/// total-weight oracle. Deliberately avoids the crate's union-find.
fn oracle_total_weight(node_count: usize, edges: &[WeightedEdge<u32>]) -> (u64, usize) {
    fn find_root(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            let grandparent = parent[parent[current]];
            parent[current] = grandparent;
            current = parent[current];
        }
        current
    }

    let mut canon: Vec<(u32, usize, usize)> = edges
        .iter()
        .filter(|edge| edge.source() != edge.target())
        .map(|edge| {
            let (lo, hi) = if edge.source() <= edge.target() {
                (edge.source(), edge.target())
            } else {
                (edge.target(), edge.source())
            };
            (*edge.weight(), lo, hi)
        })
        .collect();
    canon.sort_unstable();

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut total: u64 = 0;
    let mut accepted = 0;
    for (weight, lo, hi) in canon {
        let lo_root = find_root(&mut parent, lo);
        let hi_root = find_root(&mut parent, hi);
        if lo_root != hi_root {
            parent[hi_root] = lo_root;
            total += u64::from(weight);
            accepted += 1;
        }
    }

    (total, accepted)
}

fn assert_structural_invariants(seed: u64) -> Result<(), TestCaseError> {
    let (_, input) = random_graph(seed);
    let forest = minimum_spanning_forest(&input);

    prop_assert_eq!(
        forest.edges().len(),
        forest.node_count() - forest.component_count(),
        "forest must have nodes - components edges",
    );

    let mut parent: Vec<usize> = (0..forest.node_count()).collect();
    for edge in forest.edges() {
        prop_assert!(
            input.contains(edge),
            "accepted edge must come from the input"
        );
        prop_assert_ne!(edge.source(), edge.target(), "self-loop in forest");

        let mut source_root = edge.source();
        while parent[source_root] != source_root {
            source_root = parent[source_root];
        }
        let mut target_root = edge.target();
        while parent[target_root] != target_root {
            target_root = parent[target_root];
        }
        prop_assert_ne!(source_root, target_root, "cycle in forest");
        parent[target_root] = source_root;
    }

    Ok(())
}

fn assert_weight_matches_oracle(seed: u64) -> Result<(), TestCaseError> {
    let (_, input) = random_graph(seed);
    let forest = minimum_spanning_forest(&input);

    let total: u64 = forest
        .edges()
        .iter()
        .map(|edge| u64::from(*edge.weight()))
        .sum();
    let (expected_total, expected_edges) = oracle_total_weight(forest.node_count(), &input);

    prop_assert_eq!(total, expected_total, "total weight must be minimal");
    prop_assert_eq!(forest.edges().len(), expected_edges);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn structural_invariants_hold(seed in any::<u64>()) {
        assert_structural_invariants(seed)?;
    }

    #[test]
    fn total_weight_matches_canonical_oracle(seed in any::<u64>()) {
        assert_weight_matches_oracle(seed)?;
    }
}
