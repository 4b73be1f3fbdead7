use crate::algorithm::johnson::Johnson;
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph};
use ordered_float::OrderedFloat;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: crate::Error) -> PyErr {
    match err {
        crate::Error::MissingEdge(_, _) => PyKeyError::new_err(err.to_string()),
        crate::Error::InvalidVertex(_) | crate::Error::NonFiniteWeight(_, _) => {
            PyValueError::new_err(err.to_string())
        }
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

#[pyclass]
pub struct PyGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(vertex_count: usize) -> Self {
        PyGraph {
            graph: DirectedGraph::with_vertex_count(vertex_count),
        }
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn add_edge(&mut self, tail: usize, head: usize, weight: f64) -> PyResult<Option<f64>> {
        self.graph
            .add_edge(tail, head, OrderedFloat(weight))
            .map(|previous| previous.map(|w| w.0))
            .map_err(to_py_err)
    }

    fn remove_edge(&mut self, tail: usize, head: usize) -> PyResult<f64> {
        self.graph.remove_edge(tail, head).map(|w| w.0).map_err(to_py_err)
    }

    fn weight_of(&self, tail: usize, head: usize) -> PyResult<f64> {
        self.graph.weight_of(tail, head).map(|w| w.0).map_err(to_py_err)
    }

    fn neighbors(&self, tail: usize) -> PyResult<Vec<usize>> {
        let mut heads: Vec<usize> = self.graph.neighbors(tail).map_err(to_py_err)?.iter().copied().collect();
        heads.sort_unstable();
        Ok(heads)
    }
}

#[pyclass]
pub struct PyJohnson {
    inner: Johnson,
}

#[pymethods]
impl PyJohnson {
    #[new]
    fn new() -> Self {
        PyJohnson {
            inner: Johnson::new(),
        }
    }

    fn run_all_pairs(&self, graph: &PyGraph) -> PyResult<Vec<Vec<Option<f64>>>> {
        let result = self.inner.run_all_pairs(&graph.graph).map_err(to_py_err)?;
        Ok(result
            .distances
            .into_iter()
            .map(|row| row.into_iter().map(|d| d.map(|v| v.0)).collect())
            .collect())
    }

    fn shortest_path(
        &self,
        graph: &PyGraph,
        source: usize,
        target: usize,
    ) -> PyResult<(Option<f64>, Option<Vec<usize>>)> {
        let (distance, path) = self
            .inner
            .shortest_path(&graph.graph, source, target)
            .map_err(to_py_err)?;
        Ok((distance.map(|d| d.0), path))
    }
}

#[pymodule]
fn johnson_apsp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    m.add_class::<PyJohnson>()?;
    Ok(())
}
