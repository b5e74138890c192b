//! Façade tests: validation, weight handling, per-shot views, state
//! isolation between shots, and the tagged backend wrapper.

use ufpeel_core::testing_graphs::{planar_graph, toric_graph};
use ufpeel_core::{
    DecodeError, DynDecoder, SyndromeDecoder, UnionFindDecoder, ValidationError, WeightError,
};

use crate::common::{selected, syndrome};

#[test]
fn test_syndrome_length_checked() {
    let graph = toric_graph(4).expect("valid lattice");
    let mut decoder = UnionFindDecoder::from_graph(&graph);
    let err = decoder.decode(&[false; 15]).expect_err("one entry short");
    assert_eq!(
        err,
        DecodeError::Validation(ValidationError::SyndromeLength {
            expected: 16,
            got: 15
        })
    );
}

#[test]
fn test_boundary_defect_rejected() {
    let graph = planar_graph(4).expect("valid lattice");
    let mut decoder = UnionFindDecoder::from_graph(&graph);
    let err = decoder
        .decode(&syndrome(20, &[0]))
        .expect_err("boundary vertices never fire");
    assert_eq!(
        err,
        DecodeError::Validation(ValidationError::BoundaryDefect { vertex: 0 })
    );
}

#[test]
fn test_erasure_length_checked() {
    let graph = toric_graph(4).expect("valid lattice");
    let mut decoder = UnionFindDecoder::from_graph(&graph);
    let err = decoder
        .decode_with_erasure(&syndrome(16, &[]), &[false; 31])
        .expect_err("one erasure entry short");
    assert_eq!(
        err,
        DecodeError::Validation(ValidationError::ErasureLength {
            expected: 32,
            got: 31
        })
    );
}

#[test]
fn test_weight_sanity_checked() {
    let graph = toric_graph(4).expect("valid lattice");

    let err = UnionFindDecoder::with_weights(&graph, &[1.0; 31]).expect_err("length");
    assert_eq!(err, WeightError::Length { expected: 32, got: 31 });

    let mut weights = vec![1.0; 32];
    weights[7] = 0.0;
    let err = UnionFindDecoder::with_weights(&graph, &weights).expect_err("zero weight");
    assert_eq!(err, WeightError::NonPositive { edge: 7, weight: 0.0 });

    weights[7] = -2.0;
    let err = UnionFindDecoder::with_weights(&graph, &weights).expect_err("negative weight");
    assert_eq!(err, WeightError::NonPositive { edge: 7, weight: -2.0 });

    weights[7] = f64::NAN;
    let err = UnionFindDecoder::with_weights(&graph, &weights).expect_err("NaN weight");
    assert_eq!(err, WeightError::NonFinite { edge: 7 });

    weights[7] = f64::INFINITY;
    let err = UnionFindDecoder::with_weights(&graph, &weights).expect_err("infinite weight");
    assert_eq!(err, WeightError::NonFinite { edge: 7 });
}

#[test]
fn test_rejected_update_keeps_previous_weights() {
    let graph = planar_graph(4).expect("valid lattice");
    let mut weights = vec![1.0; 25];
    weights[12] = 3.0;
    let mut decoder = UnionFindDecoder::with_weights(&graph, &weights).expect("valid weights");

    let mut bad = weights.clone();
    bad[0] = f64::NAN;
    decoder
        .update_weights(&bad)
        .expect_err("NaN update rejected");

    // The heavy-edge behavior survives the failed update.
    let correction = decoder.decode(&syndrome(20, &[8, 9])).expect("decodes");
    assert_eq!(selected(&correction), vec![11, 13, 19]);
}

#[test]
fn test_views_unavailable_before_first_decode() {
    let graph = toric_graph(4).expect("valid lattice");
    let decoder = UnionFindDecoder::from_graph(&graph);
    assert!(decoder.modified_erasure().is_none());
    assert!(decoder.cluster_vertices().is_none());
}

#[test]
fn test_views_cleared_by_failed_decode() {
    let graph = toric_graph(4).expect("valid lattice");
    let mut decoder = UnionFindDecoder::from_graph(&graph);

    decoder.decode(&syndrome(16, &[5, 6])).expect("decodes");
    assert!(decoder.modified_erasure().is_some());

    decoder.decode(&[false; 3]).expect_err("bad length");
    assert!(
        decoder.modified_erasure().is_none(),
        "stale views must not survive a failed shot"
    );
    assert!(decoder.cluster_vertices().is_none());
}

#[test]
fn test_no_state_leaks_between_shots() {
    let graph = toric_graph(4).expect("valid lattice");
    let mut decoder = UnionFindDecoder::from_graph(&graph);

    let shot_a = syndrome(16, &[2, 3, 7, 8, 14, 15]);
    let first = decoder.decode(&shot_a).expect("decodes");
    let first_view = decoder.modified_erasure().expect("present").to_vec();

    // An unrelated shot in between.
    let second = decoder.decode(&syndrome(16, &[5, 6])).expect("decodes");
    assert_eq!(selected(&second), vec![15]);

    let again = decoder.decode(&shot_a).expect("decodes");
    assert_eq!(first, again, "same shot, same correction");
    assert_eq!(
        decoder.modified_erasure().expect("present"),
        first_view.as_slice()
    );
}

#[test]
fn test_decoding_is_deterministic_across_instances() {
    let graph = toric_graph(4).expect("valid lattice");
    let shot = syndrome(16, &[2, 3, 7, 8, 14, 15]);

    let mut a = UnionFindDecoder::from_graph(&graph);
    let mut b = UnionFindDecoder::from_graph(&graph);
    assert_eq!(
        a.decode(&shot).expect("decodes"),
        b.decode(&shot).expect("decodes")
    );
    assert_eq!(a.modified_erasure(), b.modified_erasure());
    assert_eq!(a.cluster_vertices(), b.cluster_vertices());
}

#[test]
fn test_dyn_decoder_dispatches() {
    let graph = planar_graph(4).expect("valid lattice");
    let mut backend = DynDecoder::UnionFind(UnionFindDecoder::from_graph(&graph));

    let correction = backend.decode(&syndrome(20, &[4])).expect("decodes");
    assert_eq!(selected(&correction), vec![0]);

    let mut weights = vec![1.0; 25];
    weights[12] = 3.0;
    backend.update_weights(&weights).expect("valid weights");
    let correction = backend.decode(&syndrome(20, &[8, 9])).expect("decodes");
    assert_eq!(selected(&correction), vec![11, 13, 19]);
}

#[test]
fn test_graphs_are_shareable_across_decoders() {
    let graph = toric_graph(4).expect("valid lattice");
    let shot = syndrome(16, &[5, 6]);

    // Two decoders over one graph, interleaved shots.
    let mut a = UnionFindDecoder::from_graph(&graph);
    let mut b = UnionFindDecoder::from_graph(&graph);
    let ca = a.decode(&shot).expect("decodes");
    let cb = b.decode(&shot).expect("decodes");
    assert_eq!(ca, cb);
}
