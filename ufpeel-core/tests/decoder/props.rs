//! Property-based tests over randomized error chains.
//!
//! Syndromes are derived from random edge subsets (error chains), which
//! guarantees they are realizable on the graph, so every decode must
//! terminate with a correction that reproduces the syndrome exactly at the
//! non-boundary vertices.

use proptest::prelude::*;
use ufpeel_core::testing_graphs::{planar_graph, toric_graph};
use ufpeel_core::{DecodingGraph, SyndromeDecoder, UnionFindDecoder};

use crate::common::correction_parity;

/// Syndrome induced by flipping the edges of `chain` (boundary vertices
/// stay silent).
fn chain_syndrome(graph: &DecodingGraph, chain: &[bool]) -> Vec<bool> {
    let mut parity = correction_parity(graph, chain);
    parity.truncate(graph.num_input_vertices());
    for v in 0..parity.len() {
        if graph.is_boundary(v) {
            parity[v] = false;
        }
    }
    parity
}

/// Asserts the decoded correction reproduces `syndrome` away from the
/// boundary, proptest-style.
fn check_reproduction(
    graph: &DecodingGraph,
    syndrome: &[bool],
    correction: &[bool],
) -> Result<(), TestCaseError> {
    let parity = correction_parity(graph, correction);
    for v in 0..graph.num_input_vertices() {
        if !graph.is_boundary(v) {
            prop_assert_eq!(
                parity[v],
                syndrome[v],
                "parity mismatch at vertex {}",
                v
            );
        }
    }
    Ok(())
}

proptest! {
    /// Every realizable toric syndrome decodes to a consistent correction.
    #[test]
    fn prop_toric_chain_reproduced(
        chain in prop::collection::vec(prop::bool::weighted(0.15), 32),
    ) {
        let graph = toric_graph(4).expect("valid lattice");
        let shot = chain_syndrome(&graph, &chain);

        let mut decoder = UnionFindDecoder::from_graph(&graph);
        let correction = decoder.decode(&shot).expect("realizable syndrome");
        check_reproduction(&graph, &shot, &correction)?;
    }

    /// Every realizable planar syndrome decodes to a consistent correction;
    /// boundary vertices absorb whatever parity is left over.
    #[test]
    fn prop_planar_chain_reproduced(
        chain in prop::collection::vec(prop::bool::weighted(0.2), 25),
    ) {
        let graph = planar_graph(4).expect("valid lattice");
        let shot = chain_syndrome(&graph, &chain);

        let mut decoder = UnionFindDecoder::from_graph(&graph);
        let correction = decoder.decode(&shot).expect("realizable syndrome");
        check_reproduction(&graph, &shot, &correction)?;
    }

    /// Decoding the same shot twice is bit-identical, including the
    /// modified-erasure view.
    #[test]
    fn prop_decode_deterministic(
        chain in prop::collection::vec(prop::bool::weighted(0.15), 32),
    ) {
        let graph = toric_graph(4).expect("valid lattice");
        let shot = chain_syndrome(&graph, &chain);

        let mut a = UnionFindDecoder::from_graph(&graph);
        let mut b = UnionFindDecoder::from_graph(&graph);
        let ca = a.decode(&shot).expect("realizable syndrome");
        let cb = b.decode(&shot).expect("realizable syndrome");
        prop_assert_eq!(ca, cb);
        prop_assert_eq!(a.modified_erasure(), b.modified_erasure());
    }

    /// Erasing exactly the true error chain still yields a consistent
    /// correction, and every erased edge stays eligible.
    #[test]
    fn prop_erased_chain_reproduced(
        chain in prop::collection::vec(prop::bool::weighted(0.2), 25),
    ) {
        let graph = planar_graph(4).expect("valid lattice");
        let shot = chain_syndrome(&graph, &chain);

        let mut decoder = UnionFindDecoder::from_graph(&graph);
        let correction = decoder
            .decode_with_erasure(&shot, &chain)
            .expect("realizable syndrome");
        check_reproduction(&graph, &shot, &correction)?;

        // Erased edges are part of the fused set no matter what.
        let fused = decoder.modified_erasure().expect("available after decode");
        for (edge, &erased) in chain.iter().enumerate() {
            if erased {
                prop_assert!(fused[edge], "erased edge {} must be fused", edge);
            }
        }
    }
}
