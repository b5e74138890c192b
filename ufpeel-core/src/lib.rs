//! # ufpeel-core: Union-Find / Peeling Decoder for Topological QEC Codes
//!
//! `ufpeel-core` implements the classical Union-Find decoder for topological
//! quantum error-correcting codes: given an abstract decoding graph derived
//! from a stabilizer code's check structure and a boolean syndrome marking
//! which checks fired, it recovers a minimal-weight set of graph edges
//! consistent with the observed defects, optionally honoring a known erasure
//! pattern.
//!
//! ## Overview
//!
//! Decoding runs in two phases over a shared, immutable graph:
//!
//! 1. **Cluster growth**: every defect seeds a cluster; odd clusters grow
//!    their frontier in half-steps, fusing with whatever they meet, until
//!    every cluster has even parity or touches the code boundary.
//! 2. **Peeling**: each resolved cluster's fused edges are reduced to a
//!    spanning forest and peeled leaf-by-leaf into an explicit edge
//!    correction.
//!
//! Erased edges (errors of known location but unknown sign) are fused before
//! any growth round, so erasure decoding falls out of the same pipeline.
//!
//! ## Quick Start
//!
//! ```
//! use ufpeel_core::{DecodingGraph, SyndromeDecoder, UnionFindDecoder};
//!
//! // A 4-vertex chain anchored to the boundary at both ends.
//! let edges = [[0usize, 1], [1, 2], [2, 3]];
//! let graph = DecodingGraph::build(4, &edges, &[true, false, false, true])?;
//!
//! let mut decoder = UnionFindDecoder::from_graph(&graph);
//! let correction = decoder.decode(&[false, true, false, false])?;
//! assert_eq!(correction, vec![true, false, false]);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! ## Determinism & Concurrency
//!
//! A decode call is a bounded, synchronous, single-threaded computation.
//! Clusters are scheduled smallest-first with full tie-breaks and frontiers
//! are walked in fixed order, so identical input always produces identical
//! output. A [`DecodingGraph`] is immutable after construction and safe to
//! share across concurrent decode calls; each call owns its per-shot state,
//! making multi-shot decoding embarrassingly parallel at shot granularity.
//!
//! ## Module Organization
//!
//! - [`graph`] - Immutable decoding-graph representation and adjacency.
//! - [`decoder`] - Per-shot clustering state, growth loop, and peeling.
//! - [`engine`] - Decoder façade and the backend capability interface.
//! - [`error`] - Construction / validation / weight / inconsistency errors.
//! - [`testing_graphs`] - Standard toric and planar graphs for tests.

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

// =============================================================================
// Module Declarations
// =============================================================================

/// Per-shot decoding machinery: state, union-find, growth, peeling.
pub mod decoder;

/// High-level decoder façade and backend capability interface.
pub mod engine;

/// Error taxonomy.
pub mod error;

/// Immutable decoding-graph representation.
pub mod graph;

/// Pre-built lattice graphs for tests and examples.
pub mod testing_graphs;

// =============================================================================
// Public Re-exports
// =============================================================================

// Graph construction
pub use graph::DecodingGraph;

// Decoder façade (primary API)
pub use engine::{DynDecoder, SyndromeDecoder, UnionFindDecoder};

// Per-shot internals (for advanced usage and tests)
pub use decoder::{
    spanning_forest, ClusterGrowth, PeelingDecoder, SpanningForest, UnionFind, UnionFindState,
};

// Errors
pub use error::{
    ConstructionError, DecodeError, DecodeInconsistencyError, ValidationError, WeightError,
};
