use itertools::Itertools;

use crate::Place;

/// Snapshot of the most recent shortest-path result.
///
/// Holds the ordered node sequence and the consecutive node pairs derived from
/// it. The snapshot is not tied to the graph: later edge removals do not
/// change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPath {
    nodes: Vec<Place>,
    segments: Vec<(Place, Place)>,
}

impl ShortestPath {
    pub(crate) fn from_nodes(nodes: Vec<Place>) -> Self {
        let segments = nodes
            .iter()
            .tuple_windows()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        Self { nodes, segments }
    }

    pub fn nodes(&self) -> &[Place] {
        &self.nodes
    }

    /// Consecutive `(node_i, node_i+1)` pairs along the path
    pub fn segments(&self) -> &[(Place, Place)] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    pub fn contains_node(&self, place: &str) -> bool {
        self.nodes.iter().any(|node| node == place)
    }

    /// Whether the undirected segment `{a, b}` lies on the path
    pub fn contains_segment(&self, a: &str, b: &str) -> bool {
        self.segments
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.segments.clear();
    }
}
