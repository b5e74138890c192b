//! Cluster growth: the syndrome-validation loop of the decoder.
//!
//! Growth repeatedly picks the smallest odd cluster that has not touched the
//! boundary and expands its frontier by one half-step. Edges that reach
//! their fuse threshold either absorb an unclustered vertex or fuse two
//! clusters; the loop runs until no odd non-boundary cluster remains.
//!
//! # Determinism
//!
//! The schedule is a strict order: clusters by (frontier length, accumulated
//! growth, root id), frontier vertices in insertion order, incident edges in
//! ascending edge order. A given (graph, syndrome, erasure) triple therefore
//! always produces the same fused-edge set, regardless of how many shots run
//! concurrently elsewhere.
//!
//! # Termination
//!
//! Every pop either adds growth to at least one edge or merges clusters.
//! Total growth is bounded by the sum of fuse thresholds and merges strictly
//! reduce the cluster count, so the loop reaches its fixed point in a number
//! of iterations bounded by the graph size.

use alloc::vec::Vec;

use crate::decoder::state::UnionFindState;
use crate::decoder::types::UNCLUSTERED;
use crate::decoder::union_find::UnionFind;

/// Growth operations over the per-shot clustering state.
pub trait ClusterGrowth {
    /// Grows every unfused edge on the frontier of the cluster at `root` by
    /// one half-step and returns the edges that fused against another
    /// cluster (fuse candidates, in discovery order).
    ///
    /// Edges that fuse into unclustered territory absorb the far vertex
    /// directly; absorbing a boundary vertex resolves the cluster on the
    /// spot. Vertices absorbed during the sweep join the frontier but do not
    /// grow until the cluster's next turn.
    fn grow_cluster(&mut self, root: usize) -> Vec<usize>;

    /// One full growth iteration for the cluster at `root`: grow, fuse the
    /// candidate edges, then prune and reschedule every surviving root.
    fn grow_step(&mut self, root: usize);

    /// Runs growth iterations until no cluster is both odd and free of the
    /// boundary.
    fn grow_to_fixed_point(&mut self);
}

impl<'g> ClusterGrowth for UnionFindState<'g> {
    fn grow_cluster(&mut self, root: usize) -> Vec<usize> {
        let graph = self.graph;
        let mut fuse_candidates = Vec::new();

        // Snapshot the frontier length: vertices absorbed mid-sweep wait for
        // the next turn.
        let frontier_len = self.frontier[root].len();
        for idx in 0..frontier_len {
            let v = self.frontier[root][idx] as usize;
            let incident = graph.incident_edges(v);
            let neighbors = graph.neighbors(v);
            for i in 0..incident.len() {
                let edge = incident[i] as usize;
                if self.fully_grown[edge] {
                    continue;
                }
                self.edge_growth[edge] += 1.0;
                self.cluster_growth[root] += 1.0;
                if self.edge_growth[edge] < self.threshold[edge] {
                    continue;
                }
                self.fully_grown[edge] = true;
                let far = neighbors[i];
                if self.parent[far as usize] == UNCLUSTERED {
                    self.parent[far as usize] = root as u32;
                    self.frontier[root].push(far);
                    self.record_boundary_contact(root as u32, far);
                    continue;
                }
                fuse_candidates.push(edge);
            }
        }

        fuse_candidates
    }

    fn grow_step(&mut self, root: usize) {
        let graph = self.graph;
        let fuse_candidates = self.grow_cluster(root);

        let mut new_roots: Vec<usize> = Vec::with_capacity(1 + fuse_candidates.len());
        new_roots.push(root);
        for edge in fuse_candidates {
            let (a, b) = graph.endpoints(edge);
            let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
                debug_assert!(false, "fuse candidate with unclustered endpoint");
                continue;
            };
            if root_a != root_b {
                let winner = self.union_roots(root_a, root_b);
                if !new_roots.contains(&winner) {
                    new_roots.push(winner);
                }
            }
        }

        for r in new_roots {
            self.prune_frontier(r as u32);
            self.enqueue(r as u32);
        }
    }

    fn grow_to_fixed_point(&mut self) {
        while let Some(root) = self.pop_smallest() {
            self.grow_step(root as usize);
        }
    }
}
