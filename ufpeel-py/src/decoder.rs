//! Decoder classes for Python.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use ufpeel_core::{DecodeError, SyndromeDecoder};

use crate::graph::DecodingGraph;

/// Union-Find decoder bound to a decoding graph.
///
/// Parameters
/// ----------
/// graph : DecodingGraph
///     The graph to decode over.
/// weights : list[float], optional
///     Edge weights, one finite positive value per edge. Heavier edges fuse
///     later during cluster growth. Omit for the unweighted decoder.
///
/// Examples
/// --------
/// >>> import numpy as np
/// >>> import ufpeel
/// >>> graph = ufpeel.DecodingGraph(4, [(0, 1), (1, 2), (2, 3)],
/// ...                              [True, False, False, True])
/// >>> decoder = ufpeel.UnionFindDecoder(graph)
/// >>> syndrome = np.array([False, True, False, False])
/// >>> decoder.decode(syndrome)
/// array([ True, False, False])
#[pyclass]
pub struct UnionFindDecoder {
    graph: ufpeel_core::DecodingGraph,
    weights: Option<Vec<f64>>,
    modified_erasure: Option<Vec<bool>>,
}

#[pymethods]
impl UnionFindDecoder {
    #[new]
    #[pyo3(signature = (graph, weights=None))]
    fn new(graph: &DecodingGraph, weights: Option<Vec<f64>>) -> PyResult<Self> {
        let graph = graph.inner.clone();
        if let Some(weights) = &weights {
            // Surface weight problems at construction, not per shot.
            ufpeel_core::UnionFindDecoder::with_weights(&graph, weights)
                .map_err(|err| PyValueError::new_err(err.to_string()))?;
        }
        Ok(Self {
            graph,
            weights,
            modified_erasure: None,
        })
    }

    /// Decode one syndrome, optionally honoring an erasure pattern.
    ///
    /// Parameters
    /// ----------
    /// syndrome : numpy.ndarray[bool]
    ///     One entry per declared vertex; boundary entries must be False.
    /// erasure : numpy.ndarray[bool], optional
    ///     One entry per edge; erased edges are fused before growth.
    ///
    /// Returns
    /// -------
    /// numpy.ndarray[bool]
    ///     The edge correction.
    ///
    /// Raises
    /// ------
    /// ValueError
    ///     If the syndrome or erasure is malformed.
    /// RuntimeError
    ///     If the syndrome cannot be resolved on this graph.
    #[pyo3(signature = (syndrome, erasure=None))]
    fn decode<'py>(
        &mut self,
        py: Python<'py>,
        syndrome: PyReadonlyArray1<'py, bool>,
        erasure: Option<PyReadonlyArray1<'py, bool>>,
    ) -> PyResult<Bound<'py, PyArray1<bool>>> {
        let syndrome = syndrome.as_slice()?;

        let mut decoder = match &self.weights {
            Some(weights) => ufpeel_core::UnionFindDecoder::with_weights(&self.graph, weights)
                .map_err(|err| PyValueError::new_err(err.to_string()))?,
            None => ufpeel_core::UnionFindDecoder::from_graph(&self.graph),
        };

        let correction = match erasure {
            Some(erasure) => decoder.decode_with_erasure(syndrome, erasure.as_slice()?),
            None => decoder.decode(syndrome),
        }
        .map_err(decode_err)?;

        self.modified_erasure = decoder.modified_erasure().map(|fused| fused.to_vec());
        Ok(PyArray1::from_vec(py, correction))
    }

    /// Modified erasure of the last decoded shot: the fully grown / fused
    /// edges the correction was peeled from.
    ///
    /// Returns
    /// -------
    /// numpy.ndarray[bool]
    ///     One entry per edge.
    ///
    /// Raises
    /// ------
    /// RuntimeError
    ///     If called before the first decode.
    fn get_modified_erasure<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<bool>>> {
        let fused = self
            .modified_erasure
            .as_ref()
            .ok_or_else(|| PyRuntimeError::new_err("no shot decoded yet"))?;
        Ok(PyArray1::from_vec(py, fused.clone()))
    }
}

/// Standalone peeling decoder over an explicit fused-edge set.
///
/// Mirrors the second stage of `UnionFindDecoder`: callers that already know
/// which edges are fused (e.g. a pure erasure pattern) can peel a correction
/// directly.
#[pyclass(frozen)]
pub struct PeelingDecoder;

#[pymethods]
impl PeelingDecoder {
    #[new]
    fn new() -> Self {
        Self
    }

    /// Peel a correction out of a fused-edge subgraph.
    ///
    /// Parameters
    /// ----------
    /// graph : DecodingGraph
    ///     The graph to peel over.
    /// syndrome : numpy.ndarray[bool]
    ///     One entry per declared vertex.
    /// erasure : numpy.ndarray[bool]
    ///     Fused-edge flags, one per edge (e.g. an erasure pattern).
    /// seeds : numpy.ndarray[bool], optional
    ///     Boundary vertices to root the spanning forest at, one entry per
    ///     vertex including implicit boundary vertices.
    ///
    /// Returns
    /// -------
    /// numpy.ndarray[bool]
    ///     The edge correction.
    #[pyo3(signature = (graph, syndrome, erasure, seeds=None))]
    fn decode<'py>(
        &self,
        py: Python<'py>,
        graph: &DecodingGraph,
        syndrome: PyReadonlyArray1<'py, bool>,
        erasure: PyReadonlyArray1<'py, bool>,
        seeds: Option<PyReadonlyArray1<'py, bool>>,
    ) -> PyResult<Bound<'py, PyArray1<bool>>> {
        let graph = &graph.inner;
        let syndrome = syndrome.as_slice()?;
        if syndrome.len() != graph.num_input_vertices() {
            return Err(PyValueError::new_err(format!(
                "syndrome has length {}, expected {}",
                syndrome.len(),
                graph.num_input_vertices()
            )));
        }
        let erasure = erasure.as_slice()?;
        if erasure.len() != graph.num_edges() {
            return Err(PyValueError::new_err(format!(
                "erasure has length {}, expected {}",
                erasure.len(),
                graph.num_edges()
            )));
        }

        let mut padded = vec![false; graph.num_vertices()];
        padded[..syndrome.len()].copy_from_slice(syndrome);

        let seeds = match &seeds {
            Some(seeds) => {
                let seeds = seeds.as_slice()?;
                if seeds.len() != graph.num_vertices() {
                    return Err(PyValueError::new_err(format!(
                        "seeds have length {}, expected {}",
                        seeds.len(),
                        graph.num_vertices()
                    )));
                }
                Some(seeds)
            }
            None => None,
        };
        let correction = ufpeel_core::PeelingDecoder::decode(graph, &padded, erasure, seeds)
            .map_err(|err| PyRuntimeError::new_err(err.to_string()))?;
        Ok(PyArray1::from_vec(py, correction))
    }
}

/// Maps core decode errors onto Python exception types.
fn decode_err(err: DecodeError) -> PyErr {
    match err {
        DecodeError::Validation(err) => PyValueError::new_err(err.to_string()),
        DecodeError::Inconsistency(err) => PyRuntimeError::new_err(err.to_string()),
    }
}
