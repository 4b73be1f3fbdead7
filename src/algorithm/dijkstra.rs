use crate::graph::{Graph, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Edge weights reachable from the source must be non-negative. This is not checked: with
/// negative weights the distances are silently wrong.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs from `source` and, if `target` is given, reconstructs the path to it.
    ///
    /// The path is `None` when no target is requested or when the target is unreachable;
    /// a target equal to the source yields `[source]`.
    pub fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<(Option<Vec<usize>>, Vec<Option<W>>)>
    where
        W: Weight,
        G: Graph<W>,
    {
        if let Some(target) = target {
            if !graph.has_vertex(target) {
                return Err(Error::InvalidVertex(target));
            }
        }

        let result: ShortestPathResult<W> =
            <Self as ShortestPathAlgorithm<W, G>>::compute_shortest_paths(self, graph, source)?;
        let path = target
            .and_then(|target| <Self as ShortestPathAlgorithm<W, G>>::get_path(self, &result, target));
        Ok((path, result.distances))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: a shorter distance to u was pushed after this one
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u.checked_add(weight).ok_or(Error::WeightOverflow)?;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
