use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::{Weight, model::graph::PlaceGraph};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Weight,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost, ties go to the node inserted first
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm between two nodes of the place graph.
///
/// Returns the total cost and the node sequence from `start` to `target`,
/// or `None` if `target` is unreachable. Edge weights must be non-negative.
pub(crate) fn dijkstra_path(
    graph: &PlaceGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(Weight, Vec<NodeIndex>)> {
    let mut distances: HashMap<NodeIndex, Weight> = HashMap::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if settled.put(node.index()) {
            continue;
        }

        if node == target {
            return Some((cost, reconstruct_path(&predecessors, start, target)));
        }

        for edge in graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().cost();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    // first relaxation wins on equal cost
                    if next_cost >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = next_cost;
                }
            }
            predecessors.insert(next, node);
            heap.push(State {
                cost: next_cost,
                node: next,
            });
        }
    }

    None
}

/// Follows predecessors backward from `target` and returns the path from `start`
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use crate::model::PlaceEdge;

    use super::*;

    #[test]
    fn prefers_cheaper_detour() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        let b = graph.add_node("B".into());
        let c = graph.add_node("C".into());
        graph.add_edge(a, b, PlaceEdge::weighted(1.0));
        graph.add_edge(b, c, PlaceEdge::weighted(1.0));
        graph.add_edge(a, c, PlaceEdge::weighted(5.0));

        let (cost, path) = dijkstra_path(&graph, a, c).unwrap();
        assert_eq!(cost, 2.0);
        assert_eq!(path, vec![a, b, c]);
    }

    #[test]
    fn traverses_edges_in_both_directions() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        let b = graph.add_node("B".into());
        graph.add_edge(b, a, PlaceEdge::unweighted());

        let (cost, path) = dijkstra_path(&graph, a, b).unwrap();
        assert_eq!(cost, 1.0);
        assert_eq!(path, vec![a, b]);
    }

    #[test]
    fn unreachable_target() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        let b = graph.add_node("B".into());
        assert!(dijkstra_path(&graph, a, b).is_none());
    }

    #[test]
    fn start_is_target() {
        let mut graph = PlaceGraph::default();
        let a = graph.add_node("A".into());
        assert_eq!(dijkstra_path(&graph, a, a), Some((0.0, vec![a])));
    }
}
