//! Place graph: construction and mutation

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::{Coordinate, CoordinateTable, EdgeSpec, Place, PlaceEdge};
use crate::{Error, Meters, Weight, geodesy::great_circle_distance, routing::ShortestPath};

pub type PlaceGraph = UnGraph<Place, PlaceEdge>;

/// Undirected weighted graph of named places.
///
/// Nodes keep their insertion order. Every unordered pair of places has at
/// most one edge, and edge operations never create nodes.
#[derive(Debug, Clone)]
pub struct GeoGraph {
    places: Vec<Place>,
    coordinates: CoordinateTable,
    pub(crate) graph: PlaceGraph,
    node_index: HashMap<Place, NodeIndex>,
    pub(crate) last_path: ShortestPath,
}

impl GeoGraph {
    /// Creates an empty graph over `places`.
    ///
    /// Coordinates are not checked here; a missing entry only surfaces once a
    /// distance is requested. Repeated place names keep their first occurrence.
    pub fn new<P>(places: impl IntoIterator<Item = P>, coordinates: CoordinateTable) -> Self
    where
        P: Into<Place>,
    {
        let mut seen = HashSet::new();
        let places = places
            .into_iter()
            .map(Into::into)
            .filter(|place: &Place| {
                let fresh = seen.insert(place.clone());
                if !fresh {
                    warn!("Duplicate place '{place}' ignored");
                }
                fresh
            })
            .collect();

        Self {
            places,
            coordinates,
            graph: PlaceGraph::default(),
            node_index: HashMap::new(),
            last_path: ShortestPath::default(),
        }
    }

    /// Inserts every stored place as a node. Existing nodes are left as they are.
    pub fn add_all_nodes(&mut self) {
        let before = self.graph.node_count();
        for place in &self.places {
            if !self.node_index.contains_key(place) {
                let idx = self.graph.add_node(place.clone());
                self.node_index.insert(place.clone(), idx);
            }
        }
        debug!("Added {} nodes", self.graph.node_count() - before);
    }

    /// Connects every unordered pair of distinct places, making the graph complete.
    ///
    /// With `use_distance_weight` each edge is weighted by the great-circle
    /// distance between its endpoints, otherwise edges are unweighted. Stored
    /// places are added as nodes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if a distance is needed for a place
    /// without coordinates. The graph is left untouched in that case.
    pub fn connect_all_pairs(&mut self, use_distance_weight: bool) -> Result<(), Error> {
        let edges = self
            .places
            .iter()
            .tuple_combinations()
            .map(|(a, b)| {
                let edge = if use_distance_weight {
                    PlaceEdge::weighted(f64::from(self.distance_between(a, b)?))
                } else {
                    PlaceEdge::unweighted()
                };
                Ok((a.clone(), b.clone(), edge))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        self.add_all_nodes();
        let count = edges.len();
        for (a, b, edge) in edges {
            let (a, b) = (self.node_index[&a], self.node_index[&b]);
            self.graph.update_edge(a, b, edge);
        }

        info!(
            "Connected {} places with {count} {} edges",
            self.places.len(),
            if use_distance_weight {
                "distance-weighted"
            } else {
                "unweighted"
            }
        );
        Ok(())
    }

    /// Inserts a batch of edges, overwriting the weight of existing ones.
    ///
    /// The whole batch is validated before anything is inserted.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if an endpoint is not a node
    /// - [`Error::MalformedEdgeList`] for a self-loop
    /// - [`Error::InvalidWeight`] for a negative or non-finite weight
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = EdgeSpec>) -> Result<(), Error> {
        let edges = edges
            .into_iter()
            .map(|spec| {
                let (a, b) = spec.endpoints();
                if a == b {
                    return Err(Error::MalformedEdgeList(format!(
                        "self-loop on '{a}' is not allowed"
                    )));
                }
                let edge = spec.edge();
                if let Some(weight) = edge.weight {
                    validate_weight(a, b, weight)?;
                }
                Ok((self.node(a)?, self.node(b)?, edge))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!("Adding {} edges", edges.len());
        for (a, b, edge) in edges {
            self.graph.update_edge(a, b, edge);
        }
        Ok(())
    }

    /// Inserts unweighted edges, see [`GeoGraph::add_edges`]
    ///
    /// # Errors
    ///
    /// Same as [`GeoGraph::add_edges`].
    pub fn add_unweighted_edges<P>(
        &mut self,
        edges: impl IntoIterator<Item = (P, P)>,
    ) -> Result<(), Error>
    where
        P: Into<Place>,
    {
        self.add_edges(
            edges
                .into_iter()
                .map(|(a, b)| EdgeSpec::unweighted(a, b)),
        )
    }

    /// Inserts weighted edges, see [`GeoGraph::add_edges`]
    ///
    /// # Errors
    ///
    /// Same as [`GeoGraph::add_edges`].
    pub fn add_weighted_edges<P>(
        &mut self,
        edges: impl IntoIterator<Item = (P, P, Weight)>,
    ) -> Result<(), Error>
    where
        P: Into<Place>,
    {
        self.add_edges(
            edges
                .into_iter()
                .map(|(a, b, weight)| EdgeSpec::weighted(a, b, weight)),
        )
    }

    /// Sets the weight of an existing edge. Never creates an edge.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`], [`Error::EdgeNotFound`] or [`Error::InvalidWeight`].
    pub fn set_edge_weight(&mut self, a: &str, b: &str, weight: Weight) -> Result<(), Error> {
        let edge = self.edge(a, b)?;
        validate_weight(a, b, weight)?;
        self.graph[edge].weight = Some(weight);
        debug!("Set weight {weight} on edge between '{a}' and '{b}'");
        Ok(())
    }

    /// Removes the edge `{a, b}`. Nodes stay in the graph.
    ///
    /// The cached last path is kept as a snapshot.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] or [`Error::EdgeNotFound`].
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<PlaceEdge, Error> {
        let edge = self.edge(a, b)?;
        let removed = self
            .graph
            .remove_edge(edge)
            .ok_or_else(|| Error::EdgeNotFound(a.to_string(), b.to_string()))?;
        debug!("Removed edge between '{a}' and '{b}'");
        Ok(removed)
    }

    /// Removes every edge and resets the last path. Nodes are kept.
    pub fn clear(&mut self) {
        self.graph.clear_edges();
        self.last_path.clear();
        info!("Graph cleared");
    }

    /// Great-circle distance between two places of the coordinate table
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if either place has no coordinates.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<Meters, Error> {
        Ok(great_circle_distance(self.coordinate(a)?, self.coordinate(b)?))
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn coordinates(&self) -> &CoordinateTable {
        &self.coordinates
    }

    /// Coordinates of a single place
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if the place is not in the table.
    pub fn coordinate(&self, place: &str) -> Result<Coordinate, Error> {
        self.coordinates
            .get(place)
            .copied()
            .ok_or_else(|| Error::MissingCoordinate(place.to_string()))
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Place> + '_ {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains_node(&self, place: &str) -> bool {
        self.node_index.contains_key(place)
    }

    /// All edges as `(a, b, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (&Place, &Place, &PlaceEdge)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()], edge.weight()))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edge(a, b).is_ok()
    }

    /// Payload of the edge `{a, b}`, if present
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<&PlaceEdge> {
        self.edge(a, b).ok().map(|edge| &self.graph[edge])
    }

    /// The most recent shortest-path result
    pub fn last_path(&self) -> &ShortestPath {
        &self.last_path
    }

    pub(crate) fn node(&self, place: &str) -> Result<NodeIndex, Error> {
        self.node_index
            .get(place)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(place.to_string()))
    }

    fn edge(&self, a: &str, b: &str) -> Result<EdgeIndex, Error> {
        let (na, nb) = (self.node(a)?, self.node(b)?);
        self.graph
            .find_edge(na, nb)
            .ok_or_else(|| Error::EdgeNotFound(a.to_string(), b.to_string()))
    }
}

fn validate_weight(a: &str, b: &str, weight: Weight) -> Result<(), Error> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            source_place: a.to_string(),
            target_place: b.to_string(),
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates() -> CoordinateTable {
        CoordinateTable::from([
            ("Moscow".to_string(), Coordinate::new(55.7558, 37.6173)),
            ("Saint Petersburg".to_string(), Coordinate::new(59.9343, 30.3351)),
            ("Kazan".to_string(), Coordinate::new(55.7887, 49.1221)),
            ("Tver".to_string(), Coordinate::new(56.8587, 35.9176)),
        ])
    }

    fn cities() -> GeoGraph {
        GeoGraph::new(
            ["Moscow", "Saint Petersburg", "Kazan", "Tver"],
            coordinates(),
        )
    }

    fn triangle() -> GeoGraph {
        let mut graph = GeoGraph::new(["A", "B", "C"], CoordinateTable::new());
        graph.add_all_nodes();
        graph
            .add_weighted_edges([("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)])
            .unwrap();
        graph
    }

    #[test]
    fn add_all_nodes_is_idempotent() {
        let mut graph = cities();
        graph.add_all_nodes();
        let first: Vec<Place> = graph.nodes().cloned().collect();
        graph.add_all_nodes();
        let second: Vec<Place> = graph.nodes().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(first, graph.places());
    }

    #[test]
    fn duplicate_places_collapse() {
        let mut graph = GeoGraph::new(["A", "B", "A"], CoordinateTable::new());
        graph.add_all_nodes();
        assert_eq!(graph.node_count(), 2);
        graph.connect_all_pairs(false).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn complete_graph_has_all_pairs() {
        let mut graph = cities();
        graph.connect_all_pairs(true).unwrap();
        assert_eq!(graph.edge_count(), 4 * 3 / 2);
        assert!(graph.edges().all(|(_, _, edge)| edge.weight.is_some_and(|w| w >= 0.0)));

        let weight = graph.edge_weight("Saint Petersburg", "Moscow").unwrap().cost();
        assert_eq!(weight, f64::from(graph.distance_between("Moscow", "Saint Petersburg").unwrap()));
    }

    #[test]
    fn complete_graph_unweighted() {
        let mut graph = cities();
        graph.add_all_nodes();
        graph.connect_all_pairs(false).unwrap();
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.edges().all(|(_, _, edge)| edge.weight.is_none()));
    }

    #[test]
    fn missing_coordinate_leaves_graph_untouched() {
        let mut graph = GeoGraph::new(["Moscow", "Atlantis"], coordinates());
        let result = graph.connect_all_pairs(true);
        assert!(matches!(result, Err(Error::MissingCoordinate(place)) if place == "Atlantis"));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn adding_existing_edge_overwrites_weight() {
        let mut graph = triangle();
        graph.add_weighted_edges([("C", "A", 0.5)]).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight("A", "C"), Some(&PlaceEdge::weighted(0.5)));

        graph.add_unweighted_edges([("A", "C")]).unwrap();
        assert_eq!(graph.edge_weight("A", "C"), Some(&PlaceEdge::unweighted()));
    }

    #[test]
    fn add_edges_rejects_unknown_nodes_without_partial_insert() {
        let mut graph = GeoGraph::new(["A", "B", "C"], CoordinateTable::new());
        graph.add_all_nodes();
        let result = graph.add_unweighted_edges([("A", "B"), ("B", "Z")]);
        assert!(matches!(result, Err(Error::NodeNotFound(place)) if place == "Z"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edges_rejects_self_loops_and_bad_weights() {
        let mut graph = triangle();
        assert!(matches!(
            graph.add_unweighted_edges([("A", "A")]),
            Err(Error::MalformedEdgeList(_))
        ));
        assert!(matches!(
            graph.add_weighted_edges([("A", "B", -1.0)]),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            graph.add_weighted_edges([("A", "B", f64::NAN)]),
            Err(Error::InvalidWeight { .. })
        ));
        assert_eq!(graph.edge_weight("A", "B"), Some(&PlaceEdge::weighted(1.0)));
    }

    #[test]
    fn set_edge_weight_never_creates_edges() {
        let mut graph = GeoGraph::new(["A", "B", "C"], CoordinateTable::new());
        graph.add_all_nodes();
        graph.add_unweighted_edges([("A", "B")]).unwrap();

        let result = graph.set_edge_weight("A", "C", 3.0);
        assert!(matches!(result, Err(Error::EdgeNotFound(..))));
        assert_eq!(graph.edge_count(), 1);

        graph.set_edge_weight("B", "A", 3.0).unwrap();
        assert_eq!(graph.edge_weight("A", "B"), Some(&PlaceEdge::weighted(3.0)));

        assert!(matches!(
            graph.set_edge_weight("A", "Z", 1.0),
            Err(Error::NodeNotFound(_))
        ));
        assert!(matches!(
            graph.set_edge_weight("A", "B", -2.0),
            Err(Error::InvalidWeight { .. })
        ));
    }

    #[test]
    fn remove_edge_keeps_nodes() {
        let mut graph = triangle();
        let removed = graph.remove_edge("C", "B").unwrap();
        assert_eq!(removed, PlaceEdge::weighted(1.0));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.contains_edge("B", "C"));

        let result = graph.remove_edge("B", "C");
        assert!(matches!(result, Err(Error::EdgeNotFound(a, b)) if a == "B" && b == "C"));
    }

    #[test]
    fn remove_edge_keeps_other_edges_addressable() {
        let mut graph = triangle();
        graph.remove_edge("A", "B").unwrap();
        assert_eq!(graph.edge_weight("A", "C"), Some(&PlaceEdge::weighted(5.0)));
        assert_eq!(graph.edge_weight("B", "C"), Some(&PlaceEdge::weighted(1.0)));
    }

    #[test]
    fn clear_removes_edges_and_path() {
        let mut graph = triangle();
        graph.shortest_path("A", "C").unwrap();
        graph.clear();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.last_path().is_empty());

        graph.add_unweighted_edges([("A", "C")]).unwrap();
        assert_eq!(graph.shortest_path("A", "C").unwrap().nodes(), ["A", "C"]);
    }
}
