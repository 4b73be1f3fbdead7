use std::marker::PhantomData;

use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A read-only view that appends one virtual vertex with a zero-weight edge to every vertex
/// of the underlying graph. The virtual vertex has no incoming edges.
#[derive(Debug)]
pub struct VirtualSource<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'a G,
    _weight_type: PhantomData<W>,
}

impl<'a, W, G> VirtualSource<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Wraps `graph` without copying it
    pub fn new(graph: &'a G) -> Self {
        VirtualSource {
            graph,
            _weight_type: PhantomData,
        }
    }

    /// Id of the virtual vertex
    pub fn source(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl<'a, W, G> Graph<W> for VirtualSource<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count() + 1
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count() + self.graph.vertex_count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex == self.source() {
            Box::new((0..self.graph.vertex_count()).map(|head| (head, W::zero())))
        } else {
            self.graph.outgoing_edges(vertex)
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == self.source() {
            self.graph.has_vertex(to).then(W::zero)
        } else {
            self.graph.get_edge_weight(from, to)
        }
    }
}

/// A read-only view exposing `w(u, v) + h[u] - h[v]` for every edge of the underlying graph.
///
/// When `h` comes from shortest distances out of a [`VirtualSource`], every reweighted edge is
/// non-negative and shortest paths are the same as in the underlying graph.
#[derive(Debug)]
pub struct Reweighted<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'a G,
    potentials: Vec<W>,
}

impl<'a, W, G> Reweighted<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Pairs `graph` with one potential per vertex.
    ///
    /// Fails with [`Error::WeightOverflow`] if some reweighted edge does not fit in `W`.
    pub fn new(graph: &'a G, potentials: Vec<W>) -> Result<Self> {
        if potentials.len() != graph.vertex_count() {
            return Err(Error::AlgorithmError(format!(
                "expected {} potentials, got {}",
                graph.vertex_count(),
                potentials.len()
            )));
        }

        for (tail, head, weight) in graph.edges() {
            if shift(weight, potentials[tail], potentials[head]).is_none() {
                log::warn!("reweighting edge {} -> {} overflows", tail, head);
                return Err(Error::WeightOverflow);
            }
        }

        Ok(Reweighted { graph, potentials })
    }

    /// The per-vertex potentials used for reweighting
    pub fn potentials(&self) -> &[W] {
        &self.potentials
    }

    /// The graph carrying the original weights
    pub fn original(&self) -> &'a G {
        self.graph
    }

    /// Maps a distance from `from` to `to` measured in this view back to the original weights
    pub fn unweight(&self, from: usize, to: usize, distance: W) -> Result<W> {
        let from_potential = *self.potentials.get(from).ok_or(Error::InvalidVertex(from))?;
        let to_potential = *self.potentials.get(to).ok_or(Error::InvalidVertex(to))?;
        shift(distance, to_potential, from_potential).ok_or(Error::WeightOverflow)
    }
}

// `value + plus - minus`, evaluated left to right
fn shift<W: Weight>(value: W, plus: W, minus: W) -> Option<W> {
    value.checked_add(plus)?.checked_sub(minus)
}

impl<'a, W, G> Graph<W> for Reweighted<'a, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // Every edge was checked by `new`, so the plain operators below cannot overflow.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.potentials.get(vertex) {
            Some(&offset) => Box::new(
                self.graph
                    .outgoing_edges(vertex)
                    .map(move |(head, weight)| (head, weight + offset - self.potentials[head])),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.graph
            .get_edge_weight(from, to)
            .map(|weight| weight + self.potentials[from] - self.potentials[to])
    }
}
