use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};

/// A directed graph storing an out-neighbor set per vertex and one weight per ordered pair.
///
/// `(tail, head)` has an entry in `weights` exactly when `head` is in `adjacency[tail]`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Out-neighbors for each vertex, indexed by vertex id
    adjacency: Vec<HashSet<usize>>,

    /// Weight of each edge keyed by (tail, head)
    weights: HashMap<(usize, usize), W>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// Creates a new directed graph with the specified number of isolated vertices
    pub fn with_vertex_count(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![HashSet::new(); vertices],
            weights: HashMap::new(),
        }
    }

    /// Builds a graph from `(tail, head, weight)` triples; later duplicates overwrite earlier ones
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertex_count(vertices);
        for (tail, head, weight) in edges {
            graph.add_edge(tail, head, weight)?;
        }
        Ok(graph)
    }

    /// Returns the out-neighbor set of `tail` (empty when it has no outgoing edges)
    pub fn neighbors(&self, tail: usize) -> Result<&HashSet<usize>> {
        self.adjacency.get(tail).ok_or(Error::InvalidVertex(tail))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(heads) => Box::new(
                heads
                    .iter()
                    .filter_map(move |&head| self.weights.get(&(vertex, head)).map(|&w| (head, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |heads| heads.contains(&to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get(&(from, to)).copied()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(HashSet::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight(from, to));
        }

        self.adjacency[from].insert(to);
        let previous = self.weights.insert((from, to), weight);
        if let Some(old) = previous {
            log::debug!("edge {} -> {} overwritten: {:?} replaced by {:?}", from, to, old, weight);
        }
        Ok(previous)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> Result<W> {
        let weight = self
            .weights
            .remove(&(from, to))
            .ok_or(Error::MissingEdge(from, to))?;
        self.adjacency[from].remove(&to);
        Ok(weight)
    }
}
