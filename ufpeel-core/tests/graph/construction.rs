//! Construction-time validation of decoding graphs.

use ufpeel_core::testing_graphs::{planar_graph, toric_graph};
use ufpeel_core::{ConstructionError, DecodingGraph};

#[test]
fn test_toric_counts() {
    let graph = toric_graph(4).expect("valid lattice");
    assert_eq!(graph.num_vertices(), 16);
    assert_eq!(graph.num_input_vertices(), 16);
    assert_eq!(graph.num_edges(), 32);
    assert!(graph.boundary_flags().iter().all(|&b| !b));
}

#[test]
fn test_planar_counts() {
    let graph = planar_graph(4).expect("valid lattice");
    assert_eq!(graph.num_vertices(), 20);
    assert_eq!(graph.num_edges(), 25);
    let boundary: Vec<usize> = (0..20).filter(|&v| graph.is_boundary(v)).collect();
    assert_eq!(boundary, vec![0, 1, 2, 3, 16, 17, 18, 19]);
}

#[test]
fn test_dangling_edges_get_distinct_implicit_vertices() {
    // Two dangling edges must never share one implicit boundary slot.
    let edges = vec![vec![0, 1], vec![1, 2], vec![2], vec![0]];
    let graph = DecodingGraph::build(3, &edges, &[false, false, false]).expect("valid graph");

    assert_eq!(graph.num_input_vertices(), 3);
    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.endpoints(2), (2, 3));
    assert_eq!(graph.endpoints(3), (0, 4));
    assert!(graph.is_boundary(3));
    assert!(graph.is_boundary(4));
    assert!(!graph.is_boundary(0));
}

#[test]
fn test_three_endpoint_edge_rejected() {
    let edges = vec![vec![0, 1], vec![0, 1, 2]];
    let err = DecodingGraph::build(3, &edges, &[false, false, false])
        .expect_err("hyperedge must be rejected");
    assert_eq!(err, ConstructionError::UnsupportedArity { edge: 1, arity: 3 });
}

#[test]
fn test_empty_edge_rejected() {
    let edges: Vec<Vec<usize>> = vec![vec![]];
    let err = DecodingGraph::build(2, &edges, &[false, false])
        .expect_err("empty edge must be rejected");
    assert_eq!(err, ConstructionError::UnsupportedArity { edge: 0, arity: 0 });
}

#[test]
fn test_out_of_range_endpoint_rejected() {
    let edges = vec![vec![0, 5]];
    let err = DecodingGraph::build(3, &edges, &[false, false, false])
        .expect_err("endpoint beyond declared range");
    assert_eq!(
        err,
        ConstructionError::EndpointOutOfRange {
            edge: 0,
            vertex: 5,
            num_vertices: 3
        }
    );
}

#[test]
fn test_out_of_range_dangling_endpoint_rejected() {
    let edges = vec![vec![7]];
    let err = DecodingGraph::build(3, &edges, &[false, false, false])
        .expect_err("dangling endpoint beyond declared range");
    assert_eq!(
        err,
        ConstructionError::EndpointOutOfRange {
            edge: 0,
            vertex: 7,
            num_vertices: 3
        }
    );
}

#[test]
fn test_self_loop_rejected() {
    let edges = vec![vec![1, 1]];
    let err =
        DecodingGraph::build(3, &edges, &[false, false, false]).expect_err("self loop rejected");
    assert_eq!(err, ConstructionError::DuplicateEndpoints { edge: 0, vertex: 1 });
}

#[test]
fn test_boundary_flags_length_checked() {
    let edges = vec![vec![0, 1]];
    let err = DecodingGraph::build(3, &edges, &[false, false]).expect_err("flag length mismatch");
    assert_eq!(
        err,
        ConstructionError::BoundaryFlagsLength {
            expected: 3,
            got: 2
        }
    );
}

#[test]
fn test_no_edges_is_valid() {
    let edges: Vec<Vec<usize>> = Vec::new();
    let graph = DecodingGraph::build(2, &edges, &[false, true]).expect("edgeless graph");
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.degree(0), 0);
}
