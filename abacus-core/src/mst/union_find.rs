//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Path-compressing and rank-balanced, so a union costs amortised
//! near-constant time. The structure also tracks the live component
//! count, which lets the caller read off the forest's component total
//! without a final sweep.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of disjoint components remaining.
    pub(crate) fn components(&self) -> usize {
        self.components
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path straight at the root.
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` when both nodes already share a component (the
    /// same-set predicate Kruskal uses to reject cycle-forming edges).
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
