//! Python bindings for the ufpeel-core Union-Find QEC decoder.
//!
//! This module provides PyO3 bindings for the decoding-graph representation
//! and the Union-Find / peeling decoders implemented in `ufpeel-core`.

use pyo3::prelude::*;

mod decoder;
mod graph;

use decoder::{PeelingDecoder, UnionFindDecoder};
use graph::DecodingGraph;

/// Union-Find clustering and peeling decoder for topological QEC codes.
///
/// This module provides Python bindings for the ufpeel-core decoder:
/// build a `DecodingGraph` once, then decode per-shot syndromes (and
/// optional erasure patterns) through `UnionFindDecoder`.
#[pymodule]
fn _ufpeel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DecodingGraph>()?;
    m.add_class::<UnionFindDecoder>()?;
    m.add_class::<PeelingDecoder>()?;
    Ok(())
}
