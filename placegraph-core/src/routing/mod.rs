//! Shortest-path queries over the place graph

mod bfs;
mod dijkstra;
mod path;

use log::{debug, warn};

pub use path::ShortestPath;

use crate::{DEFAULT_WEIGHT, Error, GeoGraph, Weight};

/// What a shortest path minimises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMetric {
    /// Sum of edge weights, unweighted edges cost 1.0
    #[default]
    Distance,
    /// Number of edges, weights are ignored
    Hops,
}

impl GeoGraph {
    /// Finds the minimum-weight path from `start` to `end` and caches it as the
    /// last path.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is not a node
    /// - [`Error::NoPathExists`] if the endpoints are disconnected; the cached
    ///   path is cleared in that case
    pub fn shortest_path(&mut self, start: &str, end: &str) -> Result<&ShortestPath, Error> {
        self.shortest_path_by(start, end, SearchMetric::Distance)
    }

    /// Same as [`GeoGraph::shortest_path`] with an explicit metric
    ///
    /// # Errors
    ///
    /// See [`GeoGraph::shortest_path`].
    pub fn shortest_path_by(
        &mut self,
        start: &str,
        end: &str,
        metric: SearchMetric,
    ) -> Result<&ShortestPath, Error> {
        self.last_path.clear();
        let (source, target) = (self.node(start)?, self.node(end)?);

        let found = match metric {
            SearchMetric::Distance => {
                dijkstra::dijkstra_path(&self.graph, source, target).map(|(_, path)| path)
            }
            SearchMetric::Hops => bfs::bfs_path(&self.graph, source, target),
        };

        let Some(path) = found else {
            debug!("No path from '{start}' to '{end}'");
            return Err(Error::NoPathExists(start.to_string(), end.to_string()));
        };

        let nodes = path.into_iter().map(|idx| self.graph[idx].clone()).collect();
        self.last_path = ShortestPath::from_nodes(nodes);
        debug!(
            "Path from '{start}' to '{end}' found with {} hops",
            self.last_path.hop_count()
        );
        Ok(&self.last_path)
    }

    /// Sums the edge weights along the last path, `0.0` when there is none.
    ///
    /// A segment whose edge was removed after the search counts as
    /// [`DEFAULT_WEIGHT`] and is reported at `warn` level.
    pub fn path_total_distance(&self) -> Weight {
        self.last_path
            .segments()
            .iter()
            .map(|(a, b)| match self.edge_weight(a, b) {
                Some(edge) => edge.cost(),
                None => {
                    warn!("Edge between '{a}' and '{b}' does not exist, counting {DEFAULT_WEIGHT}");
                    DEFAULT_WEIGHT
                }
            })
            .sum()
    }
}
