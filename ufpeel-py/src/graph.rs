//! Decoding-graph class for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Immutable decoding graph over which syndromes are decoded.
///
/// Parameters
/// ----------
/// num_vertices : int
///     Number of declared vertices.
/// edges : list[tuple[int, ...]]
///     Edge list. Each edge is a 2-tuple of vertex ids, or a 1-tuple for a
///     dangling edge that connects to its own implicit boundary vertex.
///     Any other arity raises ``ValueError``.
/// vertex_boundary : list[bool]
///     Boundary flag per declared vertex.
///
/// Examples
/// --------
/// >>> import ufpeel
/// >>> graph = ufpeel.DecodingGraph(3, [(0, 1), (1, 2), (2,)], [False] * 3)
/// >>> graph.num_edges
/// 3
#[pyclass(frozen)]
pub struct DecodingGraph {
    pub(crate) inner: ufpeel_core::DecodingGraph,
}

#[pymethods]
impl DecodingGraph {
    #[new]
    fn new(
        num_vertices: usize,
        edges: Vec<Vec<usize>>,
        vertex_boundary: Vec<bool>,
    ) -> PyResult<Self> {
        let inner = ufpeel_core::DecodingGraph::build(num_vertices, &edges, &vertex_boundary)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Total vertex count, including implicit boundary vertices.
    #[getter]
    fn num_vertices(&self) -> usize {
        self.inner.num_vertices()
    }

    /// Declared vertex count, the length per-shot syndromes must have.
    #[getter]
    fn num_input_vertices(&self) -> usize {
        self.inner.num_input_vertices()
    }

    /// Edge count.
    #[getter]
    fn num_edges(&self) -> usize {
        self.inner.num_edges()
    }

    fn __repr__(&self) -> String {
        format!(
            "DecodingGraph(num_vertices={}, num_edges={})",
            self.inner.num_vertices(),
            self.inner.num_edges()
        )
    }
}
