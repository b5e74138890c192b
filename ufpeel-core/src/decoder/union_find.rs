//! Union-Find (disjoint set forest) operations for cluster tracking.
//!
//! Each defect vertex starts as its own cluster; growth merges clusters as
//! edges fuse. `find` uses path halving (every visited vertex is redirected
//! to its grandparent), `union` merges by frontier size with a deterministic
//! tie-break, so repeated runs over identical input produce identical
//! cluster structures.

use crate::decoder::state::UnionFindState;
use crate::decoder::types::UNCLUSTERED;

/// Disjoint-set operations over the per-shot clustering state.
///
/// A cluster is identified by its root vertex (`parent[root] == root`). Two
/// vertices are in the same cluster iff they resolve to the same root.
/// Vertices that no cluster has reached yet resolve to `None`.
pub trait UnionFind {
    /// Finds the root of the cluster containing `vertex`, applying path
    /// halving along the way. Returns `None` for unclustered vertices.
    fn find(&mut self, vertex: usize) -> Option<usize>;

    /// Merges the two clusters rooted at `root_a` and `root_b` and returns
    /// the surviving root.
    ///
    /// The cluster with the larger frontier survives; on a tie the first
    /// argument wins. The loser's growth, parity, and boundary status fold
    /// into the winner, and its still-growable frontier vertices migrate.
    ///
    /// Both arguments must be live roots. Merging a root with itself is a
    /// no-op returning that root.
    fn union_roots(&mut self, root_a: usize, root_b: usize) -> usize;

    /// Merges the clusters containing `a` and `b`, returning the surviving
    /// root, or `None` if either vertex is not in a cluster yet.
    fn union(&mut self, a: usize, b: usize) -> Option<usize>;
}

impl<'g> UnionFind for UnionFindState<'g> {
    fn find(&mut self, vertex: usize) -> Option<usize> {
        let mut v = vertex as u32;
        if self.parent[v as usize] == UNCLUSTERED {
            return None;
        }
        // Path halving: point each visited vertex at its grandparent.
        while self.parent[v as usize] != v {
            let old = v as usize;
            v = self.parent[old];
            self.parent[old] = self.parent[v as usize];
        }
        Some(v as usize)
    }

    fn union_roots(&mut self, root_a: usize, root_b: usize) -> usize {
        debug_assert_eq!(self.parent[root_a] as usize, root_a, "root_a must be a live root");
        debug_assert_eq!(self.parent[root_b] as usize, root_b, "root_b must be a live root");

        if root_a == root_b {
            return root_a;
        }

        let (winner, loser) = if self.frontier[root_a].len() < self.frontier[root_b].len() {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        self.parent[loser] = winner as u32;
        self.cluster_growth[winner] += self.cluster_growth[loser];
        self.parity[winner] ^= self.parity[loser];
        self.touches_boundary[winner] |= self.touches_boundary[loser];

        // Migrate the loser's still-growable frontier vertices, re-pointing
        // them straight at the winning root.
        let migrated = core::mem::take(&mut self.frontier[loser]);
        for v in migrated {
            if !self.vertex_fully_surrounded(v as usize) {
                self.parent[v as usize] = winner as u32;
                self.frontier[winner].push(v);
            }
        }

        winner
    }

    fn union(&mut self, a: usize, b: usize) -> Option<usize> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        Some(self.union_roots(root_a, root_b))
    }
}
