use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    /// Returns `None` when the target is unreachable or out of range.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        reconstruct_path(&result.distances, &result.predecessors, result.source, target)
    }
}

/// Walks the predecessor chain from `target` back to `source`.
pub(crate) fn reconstruct_path<W: Copy>(
    distances: &[Option<W>],
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    distances.get(target).copied().flatten()?;

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        // A simple path never visits more vertices than the graph has.
        if path.len() > predecessors.len() {
            log::warn!("predecessor chain from {} does not reach {}", target, source);
            return None;
        }
        current = match predecessors[current] {
            Some(pred) => pred,
            None => {
                log::warn!("vertex {} has a distance but no predecessor", current);
                return None;
            }
        };
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Dense all-pairs result: row `u` holds the distances and shortest path tree out of `u`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairsResult<W>
where
    W: Weight,
{
    /// `distances[u][v]` is the shortest distance from `u` to `v`, `None` if unreachable
    pub distances: Vec<Vec<Option<W>>>,

    /// `predecessors[u][v]` is the vertex before `v` on a shortest `u -> v` path
    #[serde(skip)]
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: Weight,
{
    /// Assembles the matrix from one single-source result per row, in source order
    pub fn from_rows(rows: Vec<ShortestPathResult<W>>) -> Self {
        let (distances, predecessors) = rows
            .into_iter()
            .map(|row| (row.distances, row.predecessors))
            .unzip();
        AllPairsResult {
            distances,
            predecessors,
        }
    }

    /// Number of vertices (rows) in the matrix
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance from `from` to `to`; `None` if unreachable or out of range
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .flatten()
    }

    /// Row of distances out of `from`
    pub fn row(&self, from: usize) -> Option<&[Option<W>]> {
        self.distances.get(from).map(Vec::as_slice)
    }

    /// A shortest path from `from` to `to`, both inclusive
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let distances = self.distances.get(from)?;
        let predecessors = self.predecessors.get(from)?;
        reconstruct_path(distances, predecessors, from, to)
    }

    /// Smallest finite distance over all pairs, diagonal included
    pub fn min_distance(&self) -> Option<W> {
        self.distances.iter().flatten().flatten().copied().min()
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute the shortest distance between every ordered pair of vertices
    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
