//! Peeling: extracting an explicit edge correction from grown clusters.
//!
//! After growth reaches its fixed point, each resolved cluster's fused-edge
//! subgraph is reduced to a spanning forest (cycle edges can never be part
//! of a minimal correction and decode to `false`), and the forest is peeled
//! leaf-by-leaf: a leaf takes its unique remaining edge into the correction
//! iff the leaf currently holds a defect, toggling the defect onto the
//! parent. Boundary vertices absorb parity passively and root their trees.
//!
//! All traversal is iterative with explicit stacks; cluster size never
//! threatens the call stack.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::DecodeInconsistencyError;
use crate::graph::DecodingGraph;

/// A spanning forest of the fused-edge subgraph.
///
/// `edges` lists the tree edges in depth-first discovery order; peeling
/// consumes them in reverse, which is a valid leaf-elimination schedule
/// (every edge is peeled after its whole subtree). `degree` is the remaining
/// tree degree per vertex, decremented as edges peel off.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    /// Tree edge ids in discovery order.
    pub edges: Vec<u32>,
    /// Tree degree per vertex.
    pub degree: Vec<u32>,
}

/// Builds a spanning forest of the subgraph selected by `in_subgraph`
/// (one flag per edge).
///
/// With `seeds` present (any cluster touched the boundary), the marked
/// boundary vertices root their trees and are excluded as interior nodes,
/// so parity can always drain into them; remaining components are then swept
/// in ascending edge order. Without seeds, components are swept in ascending
/// edge order only.
#[must_use]
pub fn spanning_forest(
    graph: &DecodingGraph,
    in_subgraph: &[bool],
    seeds: Option<&[bool]>,
) -> SpanningForest {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];
    let mut forest = SpanningForest {
        edges: Vec::new(),
        degree: vec![0; n],
    };

    if let Some(seed_flags) = seeds {
        for v in 0..n {
            if seed_flags[v] && !visited[v] {
                grow_tree(graph, in_subgraph, seeds, &mut visited, &mut forest, v);
            }
        }
    }
    for edge in 0..graph.num_edges() {
        if !in_subgraph[edge] {
            continue;
        }
        let (a, b) = graph.endpoints(edge);
        if !visited[a] {
            grow_tree(graph, in_subgraph, seeds, &mut visited, &mut forest, a);
        }
        if !visited[b] {
            grow_tree(graph, in_subgraph, seeds, &mut visited, &mut forest, b);
        }
    }

    forest
}

/// Depth-first tree construction from `start`, iterative with an explicit
/// (vertex, adjacency position) frame stack. Visit order matches the natural
/// recursive sweep: adjacency in ascending edge order, deepest-first.
fn grow_tree(
    graph: &DecodingGraph,
    in_subgraph: &[bool],
    seeds: Option<&[bool]>,
    visited: &mut [bool],
    forest: &mut SpanningForest,
    start: usize,
) {
    visited[start] = true;
    let mut stack: Vec<(u32, u32)> = vec![(start as u32, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, pos) = *frame;
        let v = v as usize;
        let pos = pos as usize;
        if pos >= graph.degree(v) {
            stack.pop();
            continue;
        }
        frame.1 += 1;
        let edge = graph.incident_edges(v)[pos] as usize;
        let far = graph.neighbors(v)[pos] as usize;
        if !in_subgraph[edge] || visited[far] {
            continue;
        }
        if seeds.is_some_and(|s| s[far]) {
            // Seeds only ever root trees; an edge between two boundary
            // vertices carries no parity and stays out of the forest.
            continue;
        }
        forest.edges.push(edge as u32);
        forest.degree[v] += 1;
        forest.degree[far] += 1;
        visited[far] = true;
        stack.push((far as u32, 0));
    }
}

/// Peeling decoder: turns grown clusters into an edge correction.
///
/// Stateless; the per-shot inputs are the graph, the (full-length) syndrome,
/// the fused-edge flags produced by growth, and the boundary seeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeelingDecoder;

impl PeelingDecoder {
    /// Decodes one shot: spanning-forest reduction followed by leaf peeling.
    ///
    /// `syndrome` must cover every vertex of `graph` (including the implicit
    /// boundary tail); `fused` flags the edges selected by growth; `seeds`
    /// marks the boundary vertices absorbed by clusters, or `None` when no
    /// cluster touched the boundary.
    ///
    /// Returns the edge correction.
    ///
    /// # Errors
    ///
    /// [`DecodeInconsistencyError`] if a non-boundary defect survives full
    /// reduction, meaning growth did not actually resolve its cluster. This is a
    /// correctness check, not an expected runtime condition.
    pub fn decode(
        graph: &DecodingGraph,
        syndrome: &[bool],
        fused: &[bool],
        seeds: Option<&[bool]>,
    ) -> Result<Vec<bool>, DecodeInconsistencyError> {
        let forest = spanning_forest(graph, fused, seeds);
        Self::peel_forest(graph, syndrome, forest)
    }

    /// Peels an already-built forest against `syndrome`.
    ///
    /// Walks the tree edges in reverse discovery order. For each edge the
    /// leaf endpoint is the one with remaining tree degree 1 that is not a
    /// boundary vertex; the edge joins the correction iff the leaf holds a
    /// defect, and the defect toggles onto the other endpoint.
    ///
    /// # Errors
    ///
    /// [`DecodeInconsistencyError`] if a non-boundary defect survives.
    pub fn peel_forest(
        graph: &DecodingGraph,
        syndrome: &[bool],
        forest: SpanningForest,
    ) -> Result<Vec<bool>, DecodeInconsistencyError> {
        let mut defects = syndrome.to_vec();
        let mut degree = forest.degree;
        let mut correction = vec![false; graph.num_edges()];

        for &edge in forest.edges.iter().rev() {
            let (a, b) = graph.endpoints(edge as usize);
            // Peel from the leaf end; never treat a boundary vertex as the
            // leaf; it passively absorbs whatever parity arrives.
            let (leaf, parent) = if degree[a] != 1 || graph.is_boundary(a) {
                (b, a)
            } else {
                (a, b)
            };
            degree[leaf] -= 1;
            degree[parent] -= 1;
            if defects[leaf] {
                correction[edge as usize] = true;
                defects[leaf] = false;
                defects[parent] = !defects[parent];
            }
        }

        for (vertex, &lit) in defects.iter().enumerate() {
            if lit && !graph.is_boundary(vertex) {
                return Err(DecodeInconsistencyError { vertex });
            }
        }

        Ok(correction)
    }
}
