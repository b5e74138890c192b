//! Per-shot clustering state for Union-Find decoding.
//!
//! A [`UnionFindState`] is created fresh for every decode call, seeded from
//! the shot's erasure and syndrome, driven to a fixed point by the growth
//! loop, and then discarded once the correction has been extracted. Nothing
//! in here survives across shots; the graph it is built over does.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::decoder::types::{GrowQueueEntry, UNCLUSTERED};
use crate::graph::DecodingGraph;

/// Mutable clustering state for one decode shot.
///
/// Tracks cluster membership (a disjoint-set forest over all vertices,
/// including implicit boundary vertices), root-held cluster metadata
/// (parity, boundary contact, accumulated growth, frontier), per-edge growth
/// against fuse thresholds, and the grow queue that schedules odd clusters
/// smallest-first.
///
/// # Cluster Representation
///
/// A cluster is named by its root vertex: the vertex `r` with
/// `parent[r] == r`. Vertices outside every cluster carry a sentinel parent
/// and are absorbed lazily when growth first reaches them. Root-indexed
/// metadata is only meaningful for live roots.
///
/// # Frontier
///
/// Each root keeps an insertion-ordered list of its frontier vertices:
/// cluster members with at least one unfused incident edge. Growth walks the
/// frontier in list order and each vertex's incident edges in ascending edge
/// order, which makes every run over identical input bit-identical.
pub struct UnionFindState<'g> {
    /// The graph this shot decodes over.
    pub(crate) graph: &'g DecodingGraph,
    /// Parent pointer per vertex; `UNCLUSTERED` until absorbed.
    pub(crate) parent: Vec<u32>,
    /// Defect parity per root.
    pub(crate) parity: Vec<bool>,
    /// Whether the cluster at each root has touched the code boundary.
    pub(crate) touches_boundary: Vec<bool>,
    /// Accumulated growth per root (grow-queue key component).
    pub(crate) cluster_growth: Vec<f64>,
    /// Frontier vertex list per root.
    pub(crate) frontier: Vec<Vec<u32>>,
    /// Growth accumulated on each edge.
    pub(crate) edge_growth: Vec<f64>,
    /// Fuse threshold per edge (twice the edge weight).
    pub(crate) threshold: Vec<f64>,
    /// Whether each edge is fully grown / fused.
    pub(crate) fully_grown: Vec<bool>,
    /// Boundary vertices that some cluster has absorbed (peeling seeds).
    pub(crate) boundary_contacts: Vec<bool>,
    /// Number of distinct boundary vertices absorbed so far.
    pub(crate) num_boundary_contacts: usize,
    /// Min-queue of clusters eligible for growth.
    pub(crate) grow_queue: BinaryHeap<Reverse<GrowQueueEntry>>,
}

impl<'g> UnionFindState<'g> {
    /// Creates unweighted per-shot state: every edge fuses after two
    /// half-steps.
    #[must_use]
    pub fn new(graph: &'g DecodingGraph) -> Self {
        Self::with_thresholds(graph, vec![2.0; graph.num_edges()])
    }

    /// Creates per-shot state with explicit fuse thresholds, one per edge.
    ///
    /// The façade derives thresholds as twice the validated edge weight;
    /// callers constructing state directly are expected to do the same.
    ///
    /// # Panics
    ///
    /// Panics if `thresholds` does not have one entry per edge.
    #[must_use]
    pub fn with_thresholds(graph: &'g DecodingGraph, thresholds: Vec<f64>) -> Self {
        assert_eq!(
            thresholds.len(),
            graph.num_edges(),
            "one fuse threshold per edge required"
        );
        let n = graph.num_vertices();
        let m = graph.num_edges();
        Self {
            graph,
            parent: vec![UNCLUSTERED; n],
            parity: vec![false; n],
            touches_boundary: vec![false; n],
            cluster_growth: vec![0.0; n],
            frontier: vec![Vec::new(); n],
            edge_growth: vec![0.0; m],
            threshold: thresholds,
            fully_grown: vec![false; m],
            boundary_contacts: vec![false; n],
            num_boundary_contacts: 0,
            grow_queue: BinaryHeap::new(),
        }
    }

    /// Fuses every erased edge into a cluster before any growth round.
    ///
    /// Erased edges are fused immediately and unconditionally: each connected
    /// component of the erased subgraph becomes one cluster, rooted at the
    /// first endpoint of its lowest-index erased edge. Defects inside the
    /// component are counted into the cluster parity exactly once; boundary
    /// endpoints resolve the cluster on the spot.
    ///
    /// Must be called before [`seed_defects`](Self::seed_defects). `syndrome`
    /// covers every vertex including the implicit tail; `erasure` covers
    /// every edge.
    pub fn seed_erasure(&mut self, erasure: &[bool], syndrome: &[bool]) {
        let graph = self.graph;
        let mut syndrome_seen = vec![false; graph.num_vertices()];
        let mut edge_seen = vec![false; graph.num_edges()];

        for first in 0..graph.num_edges() {
            if !erasure[first] || edge_seen[first] {
                continue;
            }
            let root = graph.endpoints(first).0 as u32;

            // Depth-first sweep of the erased component, iterative with an
            // explicit frame stack. Frame = (edge, endpoint side, adjacency
            // position); visit order matches the natural recursive sweep.
            edge_seen[first] = true;
            self.fuse_erased_edge(root, first, syndrome, &mut syndrome_seen);
            let mut stack: Vec<(u32, u8, u32)> = vec![(first as u32, 0, 0)];
            while let Some(frame) = stack.last_mut() {
                let (edge, side, pos) = *frame;
                let ends = graph.endpoints(edge as usize);
                let v = if side == 0 { ends.0 } else { ends.1 };
                if (pos as usize) >= graph.degree(v) {
                    if side == 0 {
                        frame.1 = 1;
                        frame.2 = 0;
                    } else {
                        stack.pop();
                    }
                    continue;
                }
                frame.2 += 1;
                let next = graph.incident_edges(v)[pos as usize] as usize;
                if erasure[next] && !edge_seen[next] {
                    edge_seen[next] = true;
                    self.fuse_erased_edge(root, next, syndrome, &mut syndrome_seen);
                    stack.push((next as u32, 0, 0));
                }
            }

            self.enqueue(root);
        }
    }

    /// Turns every defect vertex not already absorbed by an erased component
    /// into its own singleton odd cluster, in ascending vertex order.
    pub fn seed_defects(&mut self, syndrome: &[bool]) {
        for v in 0..syndrome.len() {
            if syndrome[v] && self.parent[v] == UNCLUSTERED {
                self.parent[v] = v as u32;
                self.parity[v] = true;
                self.frontier[v].push(v as u32);
                self.enqueue(v as u32);
            }
        }
    }

    /// Folds one erased edge into the cluster at `root`: both endpoints join
    /// the cluster, the edge jumps straight to its fuse threshold, and any
    /// endpoint with an unfused incident edge enters the frontier.
    fn fuse_erased_edge(
        &mut self,
        root: u32,
        edge: usize,
        syndrome: &[bool],
        syndrome_seen: &mut [bool],
    ) {
        let graph = self.graph;
        let (a, b) = graph.endpoints(edge);
        self.parent[a] = root;
        self.parent[b] = root;

        for v in [a, b] {
            if !syndrome_seen[v] && syndrome[v] {
                self.parity[root as usize] = !self.parity[root as usize];
            }
            syndrome_seen[v] = true;
        }

        self.edge_growth[edge] = self.threshold[edge];
        self.fully_grown[edge] = true;
        self.cluster_growth[root as usize] += self.threshold[edge];

        for v in [a, b] {
            if !self.vertex_fully_surrounded(v) {
                self.frontier[root as usize].push(v as u32);
            }
        }
        for v in [a, b] {
            self.record_boundary_contact(root, v as u32);
        }
    }

    /// Marks boundary contact if `vertex` sits on the code boundary: the
    /// cluster at `root` becomes resolved and the vertex becomes a peeling
    /// seed.
    pub(crate) fn record_boundary_contact(&mut self, root: u32, vertex: u32) {
        if self.graph.is_boundary(vertex as usize) {
            self.touches_boundary[root as usize] = true;
            if !self.boundary_contacts[vertex as usize] {
                self.boundary_contacts[vertex as usize] = true;
                self.num_boundary_contacts += 1;
            }
        }
    }

    /// Whether every edge incident to `vertex` is fused. Fully surrounded
    /// vertices carry no growth potential and are pruned from frontiers.
    #[must_use]
    pub fn vertex_fully_surrounded(&self, vertex: usize) -> bool {
        self.graph
            .incident_edges(vertex)
            .iter()
            .all(|&e| self.fully_grown[e as usize])
    }

    /// Drops fully surrounded vertices from the frontier at `root`,
    /// preserving the order of the survivors.
    pub(crate) fn prune_frontier(&mut self, root: u32) {
        let mut list = core::mem::take(&mut self.frontier[root as usize]);
        let mut keep = 0;
        for i in 0..list.len() {
            if !self.vertex_fully_surrounded(list[i] as usize) {
                list.swap(keep, i);
                keep += 1;
            }
        }
        list.truncate(keep);
        self.frontier[root as usize] = list;
    }

    /// Enqueues the cluster at `root` for growth if it is still a live root,
    /// odd, not boundary-touching, and has a non-empty frontier.
    ///
    /// The empty-frontier guard keeps ill-formed inputs (an odd cluster with
    /// nowhere left to grow) from being rescheduled forever; such clusters
    /// surface as a peeling inconsistency instead.
    pub(crate) fn enqueue(&mut self, root: u32) {
        let r = root as usize;
        if self.parent[r] == root
            && self.parity[r]
            && !self.touches_boundary[r]
            && !self.frontier[r].is_empty()
        {
            self.grow_queue.push(Reverse(GrowQueueEntry {
                frontier_len: self.frontier[r].len(),
                growth: self.cluster_growth[r],
                root,
            }));
        }
    }

    /// Pops the smallest cluster still eligible for growth, skipping stale
    /// queue entries (entries whose snapshot key no longer matches the
    /// cluster, or whose root has been merged away).
    pub(crate) fn pop_smallest(&mut self) -> Option<u32> {
        while let Some(Reverse(entry)) = self.grow_queue.pop() {
            let r = entry.root as usize;
            if self.parent[r] == entry.root
                && self.frontier[r].len() == entry.frontier_len
                && self.cluster_growth[r] == entry.growth
            {
                return Some(entry.root);
            }
        }
        None
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    /// The graph this state decodes over.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &'g DecodingGraph {
        self.graph
    }

    /// Whether `vertex` has been absorbed into any cluster.
    #[inline]
    #[must_use]
    pub fn is_clustered(&self, vertex: usize) -> bool {
        self.parent[vertex] != UNCLUSTERED
    }

    /// Fully grown / fused flag per edge, the modified erasure of the shot.
    #[inline]
    #[must_use]
    pub fn fully_grown_edges(&self) -> &[bool] {
        &self.fully_grown
    }

    /// Growth accumulated on `edge` so far.
    #[inline]
    #[must_use]
    pub fn edge_growth(&self, edge: usize) -> f64 {
        self.edge_growth[edge]
    }

    /// Defect parity of the cluster rooted at `root`.
    #[inline]
    #[must_use]
    pub fn cluster_parity(&self, root: usize) -> bool {
        self.parity[root]
    }

    /// Whether the cluster rooted at `root` has touched the boundary.
    #[inline]
    #[must_use]
    pub fn cluster_touches_boundary(&self, root: usize) -> bool {
        self.touches_boundary[root]
    }

    /// Frontier length of the cluster rooted at `root`.
    #[inline]
    #[must_use]
    pub fn frontier_len(&self, root: usize) -> usize {
        self.frontier[root].len()
    }

    /// Boundary vertices absorbed by some cluster this shot, per vertex.
    #[inline]
    #[must_use]
    pub fn boundary_contacts(&self) -> &[bool] {
        &self.boundary_contacts
    }

    /// Number of distinct absorbed boundary vertices.
    #[inline]
    #[must_use]
    pub fn num_boundary_contacts(&self) -> usize {
        self.num_boundary_contacts
    }
}
