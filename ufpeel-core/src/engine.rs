//! High-level decoder façade.
//!
//! [`UnionFindDecoder`] binds a [`DecodingGraph`] to validated edge weights
//! and drives the full per-shot pipeline: input validation, erasure/defect
//! seeding, growth to fixed point, peeling. [`SyndromeDecoder`] is the
//! capability seam shared by decoder backends; [`DynDecoder`] is the tagged
//! wrapper callers hold when the backend is chosen at runtime.

use alloc::vec;
use alloc::vec::Vec;

use crate::decoder::growth::ClusterGrowth;
use crate::decoder::peeling::PeelingDecoder;
use crate::decoder::state::UnionFindState;
use crate::error::{DecodeError, ValidationError, WeightError};
use crate::graph::DecodingGraph;

/// Capability interface shared by syndrome-decoder backends.
///
/// A backend is bound to its graph at construction; per-shot inputs flow
/// through [`decode`](Self::decode) / [`decode_with_erasure`](Self::decode_with_erasure),
/// and reweighting (e.g. after a noise-model update) goes through
/// [`update_weights`](Self::update_weights). Backends are tagged
/// implementations behind [`DynDecoder`], not a class hierarchy.
pub trait SyndromeDecoder {
    /// Replaces the edge weights. Weights must be finite and strictly
    /// positive, one per edge.
    ///
    /// # Errors
    ///
    /// [`WeightError`] describing the first offending entry; on error the
    /// previous weights remain in effect.
    fn update_weights(&mut self, weights: &[f64]) -> Result<(), WeightError>;

    /// Decodes one syndrome, returning the edge correction.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Validation`] for malformed input,
    /// [`DecodeError::Inconsistency`] if the shot cannot be resolved.
    fn decode(&mut self, syndrome: &[bool]) -> Result<Vec<bool>, DecodeError>;

    /// Decodes one syndrome honoring a known erasure pattern.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), plus validation of the erasure length.
    fn decode_with_erasure(
        &mut self,
        syndrome: &[bool],
        erasure: &[bool],
    ) -> Result<Vec<bool>, DecodeError>;
}

/// Union-Find clustering + peeling decoder over a decoding graph.
///
/// The graph is borrowed and shared: one decoder per worker, one graph for
/// all of them. Each [`decode`](SyndromeDecoder::decode) call builds a fresh
/// [`UnionFindState`], so shots never leak state into each other and a
/// given (graph, syndrome, erasure) triple decodes bit-identically every
/// time.
///
/// # Example
///
/// ```
/// use ufpeel_core::{DecodingGraph, SyndromeDecoder, UnionFindDecoder};
///
/// let edges = [[0usize, 1], [1, 2], [2, 3]];
/// let graph = DecodingGraph::build(4, &edges, &[true, false, false, true])?;
/// let mut decoder = UnionFindDecoder::from_graph(&graph);
///
/// let correction = decoder.decode(&[false, true, false, false])?;
/// assert_eq!(correction, vec![true, false, false]);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct UnionFindDecoder<'g> {
    /// The shared decoding graph.
    graph: &'g DecodingGraph,
    /// Fuse threshold per edge (twice the edge weight).
    threshold: Vec<f64>,
    /// Fully grown edges of the last shot.
    modified_erasure: Option<Vec<bool>>,
    /// Vertices absorbed into a cluster during the last shot.
    cluster_vertices: Option<Vec<bool>>,
}

impl<'g> UnionFindDecoder<'g> {
    /// Creates an unweighted decoder: every edge fuses after two half-steps.
    #[must_use]
    pub fn from_graph(graph: &'g DecodingGraph) -> Self {
        Self {
            graph,
            threshold: vec![2.0; graph.num_edges()],
            modified_erasure: None,
            cluster_vertices: None,
        }
    }

    /// Creates a weighted decoder. An edge of weight `w` fuses once it has
    /// accumulated `2 * w` half-step units of growth, so heavier edges fuse
    /// later and weight 1 reproduces the unweighted decoder.
    ///
    /// # Errors
    ///
    /// [`WeightError`] if `weights` is not one finite, strictly positive
    /// entry per edge.
    pub fn with_weights(graph: &'g DecodingGraph, weights: &[f64]) -> Result<Self, WeightError> {
        let mut decoder = Self::from_graph(graph);
        decoder.update_weights(weights)?;
        Ok(decoder)
    }

    /// The graph this decoder is bound to.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &'g DecodingGraph {
        self.graph
    }

    /// The modified erasure of the last decoded shot: one flag per edge,
    /// marking the fully grown / fused edges the correction was peeled from.
    /// `None` until the first decode.
    #[inline]
    #[must_use]
    pub fn modified_erasure(&self) -> Option<&[bool]> {
        self.modified_erasure.as_deref()
    }

    /// Vertex-level view of the last shot: one flag per declared vertex,
    /// marking the vertices absorbed into some cluster. `None` until the
    /// first decode.
    #[inline]
    #[must_use]
    pub fn cluster_vertices(&self) -> Option<&[bool]> {
        self.cluster_vertices.as_deref()
    }

    /// Validates the shot inputs and runs the pipeline.
    fn run(
        &mut self,
        syndrome: &[bool],
        erasure: Option<&[bool]>,
    ) -> Result<Vec<bool>, DecodeError> {
        // A failed shot must not leave the previous shot's views behind.
        self.modified_erasure = None;
        self.cluster_vertices = None;

        let graph = self.graph;
        validate_syndrome(graph, syndrome)?;
        if let Some(erasure) = erasure {
            validate_erasure(graph, erasure)?;
        }

        // Syndromes address the declared vertex range; pad the implicit
        // boundary tail with non-defects.
        let mut padded = vec![false; graph.num_vertices()];
        padded[..syndrome.len()].copy_from_slice(syndrome);

        let mut state = UnionFindState::with_thresholds(graph, self.threshold.clone());
        if let Some(erasure) = erasure {
            state.seed_erasure(erasure, &padded);
        }
        state.seed_defects(&padded);
        state.grow_to_fixed_point();

        let seeds = (state.num_boundary_contacts() > 0).then(|| state.boundary_contacts());
        let correction =
            PeelingDecoder::decode(graph, &padded, state.fully_grown_edges(), seeds)?;

        let members = (0..graph.num_input_vertices())
            .map(|v| state.is_clustered(v))
            .collect();
        self.modified_erasure = Some(state.fully_grown_edges().to_vec());
        self.cluster_vertices = Some(members);

        Ok(correction)
    }
}

impl<'g> SyndromeDecoder for UnionFindDecoder<'g> {
    fn update_weights(&mut self, weights: &[f64]) -> Result<(), WeightError> {
        self.threshold = validate_weights(self.graph, weights)?;
        Ok(())
    }

    fn decode(&mut self, syndrome: &[bool]) -> Result<Vec<bool>, DecodeError> {
        self.run(syndrome, None)
    }

    fn decode_with_erasure(
        &mut self,
        syndrome: &[bool],
        erasure: &[bool],
    ) -> Result<Vec<bool>, DecodeError> {
        self.run(syndrome, Some(erasure))
    }
}

/// Tagged decoder backend.
///
/// Competing backends (e.g. matching-based decoders used for benchmarking)
/// share the [`SyndromeDecoder`] capability through their own variants here
/// rather than through inheritance; callers hold a `DynDecoder` and stay
/// agnostic of the algorithm behind it.
pub enum DynDecoder<'g> {
    /// Union-Find clustering + peeling backend.
    UnionFind(UnionFindDecoder<'g>),
}

/// Dispatches a method call to whichever backend is inside.
macro_rules! dispatch {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            DynDecoder::UnionFind(d) => d.$method($($arg),*),
        }
    };
}

impl<'g> SyndromeDecoder for DynDecoder<'g> {
    fn update_weights(&mut self, weights: &[f64]) -> Result<(), WeightError> {
        dispatch!(self, update_weights, weights)
    }

    fn decode(&mut self, syndrome: &[bool]) -> Result<Vec<bool>, DecodeError> {
        dispatch!(self, decode, syndrome)
    }

    fn decode_with_erasure(
        &mut self,
        syndrome: &[bool],
        erasure: &[bool],
    ) -> Result<Vec<bool>, DecodeError> {
        dispatch!(self, decode_with_erasure, syndrome, erasure)
    }
}

/// Checks syndrome length and boundary-vertex silence.
fn validate_syndrome(graph: &DecodingGraph, syndrome: &[bool]) -> Result<(), ValidationError> {
    if syndrome.len() != graph.num_input_vertices() {
        return Err(ValidationError::SyndromeLength {
            expected: graph.num_input_vertices(),
            got: syndrome.len(),
        });
    }
    for (vertex, &lit) in syndrome.iter().enumerate() {
        if lit && graph.is_boundary(vertex) {
            return Err(ValidationError::BoundaryDefect { vertex });
        }
    }
    Ok(())
}

/// Checks erasure length.
fn validate_erasure(graph: &DecodingGraph, erasure: &[bool]) -> Result<(), ValidationError> {
    if erasure.len() != graph.num_edges() {
        return Err(ValidationError::ErasureLength {
            expected: graph.num_edges(),
            got: erasure.len(),
        });
    }
    Ok(())
}

/// Checks weight sanity and converts weights into fuse thresholds.
fn validate_weights(graph: &DecodingGraph, weights: &[f64]) -> Result<Vec<f64>, WeightError> {
    if weights.len() != graph.num_edges() {
        return Err(WeightError::Length {
            expected: graph.num_edges(),
            got: weights.len(),
        });
    }
    let mut thresholds = Vec::with_capacity(weights.len());
    for (edge, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(WeightError::NonFinite { edge });
        }
        if weight <= 0.0 {
            return Err(WeightError::NonPositive { edge, weight });
        }
        thresholds.push(2.0 * weight);
    }
    Ok(thresholds)
}
