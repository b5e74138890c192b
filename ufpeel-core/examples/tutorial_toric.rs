//! # Tutorial: Decoding a Toric Code Syndrome
//!
//! This example decodes a handful of syndromes on a 4x4 toric-code decoding
//! graph and prints the resulting edge corrections.
//!
//! ## What You'll Learn
//!
//! 1. **Graph construction**: a toric lattice as an abstract decoding graph
//! 2. **Cluster growth**: odd clusters grow until they pair up
//! 3. **Peeling**: how a correction is read off the grown clusters
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_toric
//! ```

use ufpeel_core::testing_graphs::toric_graph;
use ufpeel_core::{SyndromeDecoder, UnionFindDecoder};

/// Lattice size: a 4x4 torus has 16 checks and 32 data qubits.
const SIZE: usize = 4;

fn main() {
    let graph = toric_graph(SIZE).expect("toric lattice construction");
    println!(
        "toric {SIZE}x{SIZE}: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let mut decoder = UnionFindDecoder::from_graph(&graph);

    // Two adjacent defects: a single data-qubit error between checks 5 and 6.
    let mut syndrome = vec![false; graph.num_vertices()];
    syndrome[5] = true;
    syndrome[6] = true;

    let correction = decoder.decode(&syndrome).expect("decode");
    report("adjacent pair", &correction);

    // A spread-out six-defect syndrome; clusters must grow before they pair.
    let defects = [2usize, 3, 7, 8, 14, 15];
    let mut syndrome = vec![false; graph.num_vertices()];
    for &v in &defects {
        syndrome[v] = true;
    }

    let correction = decoder.decode(&syndrome).expect("decode");
    report("six defects", &correction);

    let fused = decoder
        .modified_erasure()
        .expect("available after decode")
        .iter()
        .filter(|&&f| f)
        .count();
    println!("six defects grew {fused} fused edges");
}

/// Prints the edges selected by a correction.
fn report(label: &str, correction: &[bool]) {
    let edges: Vec<usize> = correction
        .iter()
        .enumerate()
        .filter_map(|(e, &on)| on.then_some(e))
        .collect();
    println!("{label}: correction on edges {edges:?}");
}
