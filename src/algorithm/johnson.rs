use rayon::prelude::*;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Reweighted, VirtualSource, Weight};
use crate::{Error, Result};

/// Johnson's all-pairs shortest paths for graphs with negative edges and no negative cycle.
///
/// The graph passed in is never modified: the virtual source and the reweighted edges are
/// read-only views over it, so its weights are the same before and after a run.
#[derive(Debug, Clone)]
pub struct Johnson {
    /// Run the per-source Dijkstra passes on the rayon pool
    parallel: bool,
    /// Size of a dedicated worker pool; `None` uses the global rayon pool
    worker_threads: Option<usize>,
}

impl Johnson {
    /// Create a new Johnson instance that runs the Dijkstra passes in parallel
    pub fn new() -> Self {
        Johnson {
            parallel: true,
            worker_threads: None,
        }
    }

    /// Create a Johnson instance that runs every Dijkstra pass on the calling thread
    pub fn sequential() -> Self {
        Johnson::new().with_parallel(false)
    }

    /// Enable or disable parallel Dijkstra passes
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run the parallel Dijkstra passes on a dedicated pool of `threads` workers.
    /// Has no effect while parallelism is disabled.
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads.max(1));
        self
    }

    /// Whether the Dijkstra passes run on a rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Size of the dedicated worker pool, if one was requested
    pub fn worker_threads(&self) -> Option<usize> {
        self.worker_threads
    }

    /// Shortest distances from a virtual source joined to every vertex by a zero-weight edge.
    ///
    /// Fails with [`Error::NegativeCycle`] if the graph contains any negative cycle and with
    /// [`Error::NonFiniteWeight`] if an edge weight is infinite or NaN.
    pub fn potentials<W, G>(&self, graph: &G) -> Result<Vec<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut negative = false;
        for (tail, head, weight) in graph.edges() {
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight(tail, head));
            }
            negative |= weight < W::zero();
        }

        if !negative {
            log::debug!("no negative weights, potentials are all zero");
            return Ok(vec![W::zero(); graph.vertex_count()]);
        }

        let augmented = VirtualSource::new(graph);
        let result: ShortestPathResult<W> =
            <BellmanFord as ShortestPathAlgorithm<W, VirtualSource<'_, W, G>>>::compute_shortest_paths(
                &BellmanFord,
                &augmented,
                augmented.source(),
            )?;

        // Drop the virtual vertex; every real vertex is one zero edge away from it.
        let mut distances = result.distances;
        distances.truncate(graph.vertex_count());
        distances
            .into_iter()
            .enumerate()
            .map(|(vertex, distance)| {
                distance.ok_or_else(|| {
                    Error::AlgorithmError(format!("vertex {} unreachable from virtual source", vertex))
                })
            })
            .collect()
    }

    /// Reweights `graph` so every edge is non-negative while shortest paths are preserved
    pub fn reweight<'a, W, G>(&self, graph: &'a G) -> Result<Reweighted<'a, W, G>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let potentials = self.potentials(graph)?;
        Reweighted::new(graph, potentials)
    }

    /// Computes the dense distance matrix of `graph`
    pub fn run_all_pairs<W, G>(&self, graph: &G) -> Result<AllPairsResult<W>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        let n = graph.vertex_count();
        log::debug!(
            "Johnson on {} vertices and {} edges (parallel: {})",
            n,
            graph.edge_count(),
            self.parallel
        );

        let reweighted = self.reweight(graph)?;
        let rows = self.dijkstra_rows(&reweighted)?;

        let mut result = AllPairsResult::from_rows(rows);
        for (from, row) in result.distances.iter_mut().enumerate() {
            for (to, distance) in row.iter_mut().enumerate() {
                if let Some(d) = *distance {
                    *distance = Some(reweighted.unweight(from, to, d)?);
                }
            }
        }

        Ok(result)
    }

    /// Shortest distance and path for one pair, with a single Dijkstra pass after reweighting.
    /// Both are `None` when `target` is unreachable from `source`.
    pub fn shortest_path<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<(Option<W>, Option<Vec<usize>>)>
    where
        W: Weight,
        G: Graph<W>,
    {
        let reweighted = self.reweight(graph)?;
        let (path, distances) = Dijkstra::new().run(&reweighted, source, Some(target))?;
        let distance = distances[target]
            .map(|d| reweighted.unweight(source, target, d))
            .transpose()?;
        Ok((distance, path))
    }

    fn dijkstra_rows<W, G>(&self, reweighted: &Reweighted<'_, W, G>) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        let n = reweighted.vertex_count();
        let row = |source: usize| -> Result<ShortestPathResult<W>> {
            <Dijkstra as ShortestPathAlgorithm<W, Reweighted<'_, W, G>>>::compute_shortest_paths(
                &Dijkstra,
                reweighted,
                source,
            )
        };

        if !self.parallel {
            return (0..n).map(row).collect();
        }

        match self.worker_threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::AlgorithmError(format!("failed to build worker pool: {}", e)))?;
                pool.install(|| (0..n).into_par_iter().map(row).collect())
            }
            None => (0..n).into_par_iter().map(row).collect(),
        }
    }
}

impl Default for Johnson {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> AllPairsAlgorithm<W, G> for Johnson
where
    W: Weight,
    G: Graph<W> + Sync,
{
    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<W>> {
        self.run_all_pairs(graph)
    }

    fn name(&self) -> &'static str {
        "Johnson"
    }
}
