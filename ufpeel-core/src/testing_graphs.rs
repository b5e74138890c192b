//! Pre-built decoding graphs for tests, examples, and benchmarks.
//!
//! Two standard lattices in their primal (Z-check) decoding-graph form:
//! the toric code (periodic, boundaryless) and the planar surface code
//! (open top/bottom boundaries). Edge ordering is fixed: vertices in row
//! major order, each contributing its not-yet-seen neighbors left, right,
//! up, down (toric) or down, right (planar), so corrections and modified
//! erasures are reproducible constants in tests.

use alloc::vec::Vec;

use crate::error::ConstructionError;
use crate::graph::DecodingGraph;

/// Edge list of a `size x size` toric-code decoding graph.
///
/// Vertices are `row * size + col`; every vertex connects to its four
/// periodic neighbors. `size * size` vertices, `2 * size * size` edges.
#[must_use]
pub fn toric_edges(size: usize) -> Vec<[usize; 2]> {
    let n = size * size;
    let mut edges = Vec::with_capacity(2 * n);
    let mut seen = alloc::collections::BTreeSet::new();
    for v in 0..n {
        let row = v / size;
        let col = v % size;
        let left = row * size + (col + size - 1) % size;
        let right = row * size + (col + 1) % size;
        let up = ((row + size - 1) % size) * size + col;
        let down = ((row + 1) % size) * size + col;
        for far in [left, right, up, down] {
            let key = (v.min(far), v.max(far));
            if seen.insert(key) {
                edges.push([v, far]);
            }
        }
    }
    edges
}

/// Builds a `size x size` toric-code decoding graph. No boundary vertices;
/// realizable syndromes have even parity.
///
/// # Errors
///
/// [`ConstructionError`] if `size < 2` (a 1-cycle would be a self-loop).
pub fn toric_graph(size: usize) -> Result<DecodingGraph, ConstructionError> {
    let n = size * size;
    let boundary = alloc::vec![false; n];
    DecodingGraph::build(n, &toric_edges(size), &boundary)
}

/// Edge list of a planar surface-code decoding graph with `size` columns.
///
/// Layout: `size` top boundary vertices, `size * (size - 1)` interior
/// vertices in row major order, `size` bottom boundary vertices. Each top
/// boundary vertex drops one edge to the first interior row; each interior
/// vertex contributes its downward edge and (except in the last column) its
/// rightward edge.
#[must_use]
pub fn planar_edges(size: usize) -> Vec<[usize; 2]> {
    assert!(size >= 1, "planar lattice needs at least one column");
    let interior = size * (size - 1);
    let mut edges = Vec::new();
    for col in 0..size {
        edges.push([col, size + col]);
    }
    for row in 0..size - 1 {
        for col in 0..size {
            let v = size + row * size + col;
            let down = if row < size - 2 {
                v + size
            } else {
                interior + size + col
            };
            edges.push([v, down]);
            if col < size - 1 {
                edges.push([v, v + 1]);
            }
        }
    }
    edges
}

/// Boundary flags matching [`planar_edges`]: the first and last `size`
/// vertices are boundary.
#[must_use]
pub fn planar_boundary(size: usize) -> Vec<bool> {
    assert!(size >= 1, "planar lattice needs at least one column");
    let interior = size * (size - 1);
    let mut flags = alloc::vec![true; size];
    flags.extend(core::iter::repeat(false).take(interior));
    flags.extend(core::iter::repeat(true).take(size));
    flags
}

/// Builds a planar surface-code decoding graph with `size` columns and open
/// top/bottom boundaries. Sizes below 2 degenerate to boundary-only chains.
///
/// # Errors
///
/// [`ConstructionError`] if the generated edge list is rejected (cannot
/// happen for `size >= 1`; kept for signature symmetry with
/// [`toric_graph`]).
pub fn planar_graph(size: usize) -> Result<DecodingGraph, ConstructionError> {
    let boundary = planar_boundary(size);
    DecodingGraph::build(boundary.len(), &planar_edges(size), &boundary)
}
