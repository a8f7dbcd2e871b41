use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::dijkstra::reconstruct_path;
use crate::model::graph::PlaceGraph;

/// Breadth-first search for the path with the fewest edges, ignoring weights
pub(crate) fn bfs_path(
    graph: &PlaceGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut discovered = FixedBitSet::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    discovered.insert(start.index());

    while let Some(node) = queue.pop_front() {
        if node == target {
            return Some(reconstruct_path(&predecessors, start, target));
        }

        for next in graph.neighbors(node) {
            if discovered.put(next.index()) {
                continue;
            }
            predecessors.insert(next, node);
            queue.push_back(next);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::model::PlaceEdge;

    use super::*;

    #[test]
    fn fewest_hops_ignores_weights() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        let b = graph.add_node("B".into());
        let c = graph.add_node("C".into());
        graph.add_edge(a, b, PlaceEdge::weighted(1.0));
        graph.add_edge(b, c, PlaceEdge::weighted(1.0));
        graph.add_edge(a, c, PlaceEdge::weighted(5.0));

        assert_eq!(bfs_path(&graph, a, c), Some(vec![a, c]));
        assert_eq!(bfs_path(&graph, c, a), Some(vec![c, a]));
    }

    #[test]
    fn unreachable_target() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        let b = graph.add_node("B".into());
        let c = graph.add_node("C".into());
        graph.add_edge(a, b, PlaceEdge::unweighted());
        assert!(bfs_path(&graph, a, c).is_none());
    }
}
