//! # Tutorial: Boundaries, Erasure, and Weights on a Planar Code
//!
//! This example decodes on a planar surface-code graph, where defects near
//! the top or bottom edge can resolve against the boundary instead of
//! pairing with another defect. It also shows erasure-aware decoding and how
//! edge weights steer the correction.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_planar
//! ```

use ufpeel_core::testing_graphs::{planar_edges, planar_graph};
use ufpeel_core::{SyndromeDecoder, UnionFindDecoder};

/// Number of columns in the planar lattice.
const SIZE: usize = 4;

fn main() {
    let graph = planar_graph(SIZE).expect("planar lattice construction");
    println!(
        "planar {SIZE}-column: {} vertices ({} boundary), {} edges",
        graph.num_vertices(),
        graph
            .boundary_flags()
            .iter()
            .filter(|&&b| b)
            .count(),
        graph.num_edges()
    );

    // A defect adjacent to the top boundary resolves against it.
    let mut decoder = UnionFindDecoder::from_graph(&graph);
    let mut syndrome = vec![false; graph.num_vertices()];
    syndrome[5] = true;
    let correction = decoder.decode(&syndrome).expect("decode");
    report("single defect", &correction);

    // Erasure: edge 12 (between checks 8 and 9) is known to hold an error of
    // unknown sign. Its endpoints' defects resolve through it without growth.
    let mut erasure = vec![false; graph.num_edges()];
    erasure[12] = true;
    let mut syndrome = vec![false; graph.num_vertices()];
    syndrome[8] = true;
    syndrome[9] = true;
    let correction = decoder
        .decode_with_erasure(&syndrome, &erasure)
        .expect("decode with erasure");
    report("erased edge", &correction);

    // Weights: make the direct edge between the two defects expensive and
    // the correction routes around it.
    let mut weights = vec![1.0; graph.num_edges()];
    weights[12] = 3.0;
    let mut weighted =
        UnionFindDecoder::with_weights(&graph, &weights).expect("validated weights");
    let correction = weighted.decode(&syndrome).expect("decode weighted");
    report("heavy direct edge", &correction);
}

/// Prints the endpoint pairs selected by a correction.
fn report(label: &str, correction: &[bool]) {
    let edges = planar_edges(SIZE);
    let picked: Vec<[usize; 2]> = correction
        .iter()
        .enumerate()
        .filter_map(|(e, &on)| on.then_some(edges[e]))
        .collect();
    println!("{label}: correction on {picked:?}");
}
