//! Static decoding-graph structure holding topology and adjacency information.
//!
//! A [`DecodingGraph`] is built once from the check structure of a stabilizer
//! code and then shared, read-only, across every decode call. All per-shot
//! state (cluster membership, edge growth) lives in
//! [`UnionFindState`](crate::decoder::UnionFindState), never here.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::ConstructionError;

/// Immutable decoding graph: vertices, edges, boundary flags, adjacency.
///
/// # Vertex Numbering
///
/// Callers declare `num_vertices` real vertices. Every 1-terminal ("dangling")
/// edge then receives its own freshly allocated implicit boundary vertex,
/// appended after the declared range. Implicit vertices are never shared
/// between dangling edges, so growth and fusion account for each of them
/// independently. [`num_input_vertices`](Self::num_input_vertices) is the
/// declared count; [`num_vertices`](Self::num_vertices) includes the implicit
/// tail. Per-shot syndromes address only the declared range.
///
/// # Adjacency
///
/// For each vertex the graph stores the incident edge ids and the far
/// endpoint of each incident edge, aligned index-for-index and ordered by
/// ascending edge id. That ordering is part of the decoder's determinism
/// contract: growth and forest traversal walk adjacency in storage order.
///
/// # Thread Safety
///
/// The graph is immutable after construction and safe to share across
/// concurrently running decode calls.
#[derive(Debug, Clone)]
pub struct DecodingGraph {
    /// Declared vertex count (excluding implicit boundary vertices).
    num_input_vertices: usize,
    /// Boundary flag per vertex, including the implicit tail.
    boundary: Vec<bool>,
    /// Endpoint pair per edge. 1-terminal edges point at their implicit vertex.
    endpoints: Vec<(u32, u32)>,
    /// Incident edge ids per vertex, ascending.
    adj_edges: Vec<Vec<u32>>,
    /// Far endpoint per incident edge, aligned with `adj_edges`.
    adj_vertices: Vec<Vec<u32>>,
}

impl DecodingGraph {
    /// Builds a decoding graph from a vertex count, an edge list, and
    /// per-vertex boundary flags.
    ///
    /// Each edge is a slice of endpoint ids: two distinct ids for a bulk
    /// edge, or a single id for a dangling edge that connects to a fresh
    /// implicit boundary vertex.
    ///
    /// # Errors
    ///
    /// * [`ConstructionError::BoundaryFlagsLength`] if `boundary_flags` does
    ///   not have exactly `num_vertices` entries.
    /// * [`ConstructionError::UnsupportedArity`] for an edge with 0 or 3+
    ///   endpoints.
    /// * [`ConstructionError::EndpointOutOfRange`] for an endpoint outside
    ///   the declared range.
    /// * [`ConstructionError::DuplicateEndpoints`] for a self-loop.
    pub fn build<E: AsRef<[usize]>>(
        num_vertices: usize,
        edges: &[E],
        boundary_flags: &[bool],
    ) -> Result<Self, ConstructionError> {
        if boundary_flags.len() != num_vertices {
            return Err(ConstructionError::BoundaryFlagsLength {
                expected: num_vertices,
                got: boundary_flags.len(),
            });
        }

        // Validate every edge before allocating anything.
        let mut num_dangling = 0usize;
        for (edge, ends) in edges.iter().enumerate() {
            let ends = ends.as_ref();
            match ends {
                &[a, b] => {
                    for vertex in [a, b] {
                        if vertex >= num_vertices {
                            return Err(ConstructionError::EndpointOutOfRange {
                                edge,
                                vertex,
                                num_vertices,
                            });
                        }
                    }
                    if a == b {
                        return Err(ConstructionError::DuplicateEndpoints { edge, vertex: a });
                    }
                }
                &[a] => {
                    if a >= num_vertices {
                        return Err(ConstructionError::EndpointOutOfRange {
                            edge,
                            vertex: a,
                            num_vertices,
                        });
                    }
                    num_dangling += 1;
                }
                _ => {
                    return Err(ConstructionError::UnsupportedArity {
                        edge,
                        arity: ends.len(),
                    });
                }
            }
        }

        let total = num_vertices + num_dangling;
        let mut boundary = Vec::with_capacity(total);
        boundary.extend_from_slice(boundary_flags);
        boundary.resize(total, true);

        let mut endpoints = Vec::with_capacity(edges.len());
        let mut next_implicit = num_vertices as u32;
        for ends in edges {
            match ends.as_ref() {
                &[a, b] => endpoints.push((a as u32, b as u32)),
                &[a] => {
                    endpoints.push((a as u32, next_implicit));
                    next_implicit += 1;
                }
                // Unreachable: arity was validated above.
                _ => unreachable!("edge arity validated before construction"),
            }
        }

        let mut adj_edges = vec![Vec::new(); total];
        let mut adj_vertices = vec![Vec::new(); total];
        for (edge, &(a, b)) in endpoints.iter().enumerate() {
            adj_edges[a as usize].push(edge as u32);
            adj_vertices[a as usize].push(b);
            adj_edges[b as usize].push(edge as u32);
            adj_vertices[b as usize].push(a);
        }

        Ok(Self {
            num_input_vertices: num_vertices,
            boundary,
            endpoints,
            adj_edges,
            adj_vertices,
        })
    }

    /// Total vertex count, including implicit boundary vertices.
    #[inline]
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.boundary.len()
    }

    /// Declared vertex count, the range per-shot syndromes address.
    #[inline]
    #[must_use]
    pub fn num_input_vertices(&self) -> usize {
        self.num_input_vertices
    }

    /// Edge count.
    #[inline]
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.endpoints.len()
    }

    /// The two endpoints of `edge`. For a dangling edge the second endpoint
    /// is its implicit boundary vertex.
    #[inline]
    #[must_use]
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        let (a, b) = self.endpoints[edge];
        (a as usize, b as usize)
    }

    /// Whether `vertex` sits on the code boundary (explicit or implicit).
    #[inline]
    #[must_use]
    pub fn is_boundary(&self, vertex: usize) -> bool {
        self.boundary[vertex]
    }

    /// Boundary flags for every vertex, including the implicit tail.
    #[inline]
    #[must_use]
    pub fn boundary_flags(&self) -> &[bool] {
        &self.boundary
    }

    /// Edge ids incident to `vertex`, in ascending edge order.
    #[inline]
    #[must_use]
    pub fn incident_edges(&self, vertex: usize) -> &[u32] {
        &self.adj_edges[vertex]
    }

    /// Far endpoints of the edges incident to `vertex`, aligned with
    /// [`incident_edges`](Self::incident_edges).
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[u32] {
        &self.adj_vertices[vertex]
    }

    /// Number of edges incident to `vertex`.
    #[inline]
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.adj_edges[vertex].len()
    }
}
