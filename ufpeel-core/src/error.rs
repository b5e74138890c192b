//! Error taxonomy for graph construction, input validation, and decoding.
//!
//! Construction- and validation-class errors are detected eagerly, before any
//! growth round runs. [`DecodeInconsistencyError`] is different in kind: it
//! reports an internal invariant violation discovered after peeling and is
//! fatal for the shot that produced it.

use thiserror::Error;

/// Rejection of a malformed decoding graph at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// An edge references a vertex index outside `[0, num_vertices)`.
    #[error("edge {edge} references vertex {vertex}, but the graph has {num_vertices} vertices")]
    EndpointOutOfRange {
        /// Index of the offending edge.
        edge: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// Declared vertex count of the graph.
        num_vertices: usize,
    },

    /// An edge has an endpoint count other than 1 or 2.
    #[error("edge {edge} has {arity} endpoints; only 1- and 2-terminal edges are supported")]
    UnsupportedArity {
        /// Index of the offending edge.
        edge: usize,
        /// Number of endpoints supplied.
        arity: usize,
    },

    /// A 2-terminal edge names the same vertex twice.
    #[error("edge {edge} connects vertex {vertex} to itself")]
    DuplicateEndpoints {
        /// Index of the offending edge.
        edge: usize,
        /// The repeated vertex id.
        vertex: usize,
    },

    /// The boundary-flag vector does not match the declared vertex count.
    #[error("expected {expected} boundary flags, got {got}")]
    BoundaryFlagsLength {
        /// Declared vertex count.
        expected: usize,
        /// Length of the supplied flag vector.
        got: usize,
    },
}

/// Rejection of a per-shot syndrome/erasure input before decoding starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The syndrome vector does not cover every declared vertex.
    #[error("syndrome has length {got}, expected {expected}")]
    SyndromeLength {
        /// Declared vertex count of the graph.
        expected: usize,
        /// Length of the supplied syndrome.
        got: usize,
    },

    /// The erasure vector does not cover every edge.
    #[error("erasure has length {got}, expected {expected}")]
    ErasureLength {
        /// Edge count of the graph.
        expected: usize,
        /// Length of the supplied erasure.
        got: usize,
    },

    /// A boundary vertex was marked as a defect. Boundary vertices are free
    /// parity sinks and can never fire.
    #[error("syndrome marks boundary vertex {vertex} as a defect")]
    BoundaryDefect {
        /// The offending boundary vertex.
        vertex: usize,
    },
}

/// Rejection of an edge-weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    /// The weight vector does not cover every edge.
    #[error("weights have length {got}, expected {expected}")]
    Length {
        /// Edge count of the graph.
        expected: usize,
        /// Length of the supplied weight vector.
        got: usize,
    },

    /// A weight is zero or negative.
    #[error("edge {edge} has non-positive weight {weight}")]
    NonPositive {
        /// Index of the offending edge.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// A weight is NaN or infinite.
    #[error("edge {edge} has a non-finite weight")]
    NonFinite {
        /// Index of the offending edge.
        edge: usize,
    },
}

/// A defect vertex survived full peeling.
///
/// This should never occur for well-formed input: growth termination
/// guarantees every cluster is resolved before peeling runs. Seeing it means
/// either the input syndrome is not realizable on the graph (e.g. odd total
/// parity on a boundaryless graph) or the decoder itself is broken. Either
/// way the shot must fail loudly; a silently wrong correction is worse than
/// a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {vertex} still holds a defect after peeling; its cluster was never resolved")]
pub struct DecodeInconsistencyError {
    /// The non-boundary vertex left with an unexplained defect.
    pub vertex: usize,
}

/// Any failure surfaced by a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The per-shot input was rejected before any growth work began.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Peeling detected an unresolved cluster.
    #[error(transparent)]
    Inconsistency(#[from] DecodeInconsistencyError),
}
