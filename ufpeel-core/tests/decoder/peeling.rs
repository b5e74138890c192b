//! Peeling tests: forest reduction, cycle discard, leaf order, boundary
//! rooting, and the inconsistency check.

use ufpeel_core::testing_graphs::toric_graph;
use ufpeel_core::{spanning_forest, DecodingGraph, PeelingDecoder};

use crate::common::{selected, syndrome};

/// Fused-edge vector with the given edges set.
fn fused(m: usize, edges: &[usize]) -> Vec<bool> {
    let mut f = vec![false; m];
    for &e in edges {
        f[e] = true;
    }
    f
}

#[test]
fn test_forest_discards_cycle_edge() {
    let graph = toric_graph(4).expect("valid lattice");
    // The 4-cycle 0-1-5-4: edges (0,1)=1, (1,5)=6, (4,5)=13, (0,4)=3.
    let forest = spanning_forest(&graph, &fused(32, &[1, 3, 6, 13]), None);

    assert_eq!(forest.edges, vec![1, 6, 13], "one cycle edge stays out");
    assert_eq!(forest.degree[0], 1);
    assert_eq!(forest.degree[1], 2);
    assert_eq!(forest.degree[5], 2);
    assert_eq!(forest.degree[4], 1);
}

#[test]
fn test_cycle_edge_never_corrected() {
    let graph = toric_graph(4).expect("valid lattice");
    let correction = PeelingDecoder::decode(
        &graph,
        &syndrome(16, &[1, 4]),
        &fused(32, &[1, 3, 6, 13]),
        None,
    )
    .expect("consistent cluster");

    assert!(!correction[3], "cycle edge decodes to false");
    assert_eq!(selected(&correction), vec![6, 13]);
}

#[test]
fn test_peel_resolves_chain_parity() {
    // Chain 0-1-2-3; defects at the two interior vertices pair up through
    // the middle edge.
    let edges = [[0usize, 1], [1, 2], [2, 3]];
    let graph = DecodingGraph::build(4, &edges, &[true, false, false, true]).expect("valid graph");

    let correction =
        PeelingDecoder::decode(&graph, &syndrome(4, &[1, 2]), &fused(3, &[0, 1, 2]), None)
            .expect("consistent cluster");
    assert_eq!(selected(&correction), vec![1]);
}

#[test]
fn test_boundary_roots_absorb_parity() {
    let edges = [[0usize, 1], [1, 2], [2, 3]];
    let graph = DecodingGraph::build(4, &edges, &[true, false, false, true]).expect("valid graph");

    let mut seeds = vec![false; 4];
    seeds[0] = true;
    let correction = PeelingDecoder::decode(
        &graph,
        &syndrome(4, &[1]),
        &fused(3, &[0]),
        Some(&seeds),
    )
    .expect("consistent cluster");
    assert_eq!(
        selected(&correction),
        vec![0],
        "lone defect drains into the boundary root"
    );
}

#[test]
fn test_seeded_forest_roots_at_boundary() {
    let edges = [[0usize, 1], [1, 2], [2, 3]];
    let graph = DecodingGraph::build(4, &edges, &[true, false, false, true]).expect("valid graph");

    let mut seeds = vec![false; 4];
    seeds[0] = true;
    seeds[3] = true;
    let forest = spanning_forest(&graph, &fused(3, &[0, 1, 2]), Some(&seeds));

    // Vertex 0 roots the tree; vertex 3 only ever roots, so the edge into it
    // is discovered from vertex 2.
    assert_eq!(forest.edges, vec![0, 1]);
    assert_eq!(forest.degree[3], 0, "second seed left isolated");
}

#[test]
fn test_unresolved_defect_is_an_error() {
    let graph = toric_graph(4).expect("valid lattice");
    let err = PeelingDecoder::decode(&graph, &syndrome(16, &[5]), &fused(32, &[]), None)
        .expect_err("defect with no fused edges cannot be explained");
    assert_eq!(err.vertex, 5);
}

#[test]
fn test_inconsistency_reports_lowest_vertex() {
    let graph = toric_graph(4).expect("valid lattice");
    let err = PeelingDecoder::decode(&graph, &syndrome(16, &[9, 3]), &fused(32, &[]), None)
        .expect_err("unexplained defects");
    assert_eq!(err.vertex, 3);
}

#[test]
fn test_empty_forest_on_clean_syndrome() {
    let graph = toric_graph(4).expect("valid lattice");
    let correction = PeelingDecoder::decode(&graph, &syndrome(16, &[]), &fused(32, &[]), None)
        .expect("nothing to do");
    assert!(correction.iter().all(|&c| !c));
}
