use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Round-based Bellman-Ford.
///
/// Round `k` relaxes every edge against the distances of round `k - 1`, so after round `k` each
/// distance is the best over walks of at most `k` edges. A round that changes nothing is a fixed
/// point. Shortest paths have at most `n - 1` edges, so if round `n` still changes something a
/// negative cycle is reachable from the source and [`Error::NegativeCycle`] is returned.
/// A relaxation whose sum does not fit in the weight type fails with [`Error::WeightOverflow`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        let mut previous: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        previous[source] = Some(W::zero());

        for round in 1..=n {
            let mut current = previous.clone();

            for tail in 0..n {
                let Some(base) = previous[tail] else {
                    continue;
                };
                for (head, weight) in graph.outgoing_edges(tail) {
                    let candidate = base.checked_add(weight).ok_or(Error::WeightOverflow)?;
                    if current[head].map_or(true, |best| candidate < best) {
                        current[head] = Some(candidate);
                        predecessors[head] = Some(tail);
                    }
                }
            }

            if current == previous {
                log::debug!("Bellman-Ford from {} reached a fixed point after {} rounds", source, round);
                return Ok(ShortestPathResult {
                    distances: previous,
                    predecessors,
                    source,
                });
            }
            previous = current;
        }

        log::debug!("Bellman-Ford from {} still relaxing after {} rounds", source, n);
        Err(Error::NegativeCycle)
    }
}
