use std::collections::HashMap;

use placegraph_core::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyTuple;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::error::to_py_err;

/// PlacesGraph
///
/// An undirected graph of named places whose edges may be weighted by the
/// great-circle distance between the places.
///
/// The graph keeps the result of the most recent shortest-path search so it
/// can be highlighted by a renderer and summed with `path_total_distance`.
///
/// Example:
///
/// .. code-block:: python
///
///     graph = PlacesGraph(["Moscow", "Tver"], {"Moscow": (55.75, 37.61), "Tver": (56.85, 35.91)})
///     graph.add_all_nodes()
///     graph.connect_all_pairs(use_distance_weight=True)
///     graph.shortest_path("Moscow", "Tver")
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "PlacesGraph")]
pub struct PyPlacesGraph {
    pub(crate) graph: GeoGraph,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyPlacesGraph {
    #[new]
    pub fn new(places: Vec<String>, coordinates: HashMap<String, (f64, f64)>) -> Self {
        let coordinates = coordinates
            .into_iter()
            .map(|(place, coordinate)| (place, Coordinate::from(coordinate)))
            .collect();
        Self {
            graph: GeoGraph::new(places, coordinates),
        }
    }

    /// Add every place as a node. Calling it again is a no-op.
    pub fn add_all_nodes(&mut self) {
        self.graph.add_all_nodes();
    }

    /// Connect every pair of places, optionally weighted by distance in meters
    #[pyo3(signature = (use_distance_weight = false))]
    pub fn connect_all_pairs(&mut self, use_distance_weight: bool) -> PyResult<()> {
        self.graph
            .connect_all_pairs(use_distance_weight)
            .map_err(to_py_err)
    }

    /// Add edges given as ``(a, b)`` or ``(a, b, weight)`` tuples.
    ///
    /// All tuples of one call must have the same shape.
    pub fn add_edges<'py>(&mut self, edges: Vec<Bound<'py, PyTuple>>) -> PyResult<()> {
        let rows = edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| edge_row(idx, edge))
            .collect::<PyResult<Vec<_>>>()?;
        let edges = edge_list_from_rows(rows).map_err(to_py_err)?;
        self.graph.add_edges(edges).map_err(to_py_err)
    }

    /// Set the weight of an existing edge
    pub fn set_edge_weight(&mut self, a: &str, b: &str, weight: f64) -> PyResult<()> {
        self.graph.set_edge_weight(a, b, weight).map_err(to_py_err)
    }

    pub fn remove_edge(&mut self, a: &str, b: &str) -> PyResult<()> {
        self.graph.remove_edge(a, b).map(|_| ()).map_err(to_py_err)
    }

    /// Remove all edges and forget the last path
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Find the shortest path and remember it as the last path.
    ///
    /// With ``hops=True`` the path with the fewest edges is returned instead
    /// of the one with the smallest total weight.
    #[pyo3(signature = (start, end, hops = false))]
    pub fn shortest_path(&mut self, start: &str, end: &str, hops: bool) -> PyResult<Vec<String>> {
        let metric = if hops {
            SearchMetric::Hops
        } else {
            SearchMetric::Distance
        };
        self.graph
            .shortest_path_by(start, end, metric)
            .map(|path| path.nodes().to_vec())
            .map_err(to_py_err)
    }

    /// Sum of edge weights along the last path
    pub fn path_total_distance(&self) -> f64 {
        self.graph.path_total_distance()
    }

    /// Great-circle distance in meters between two places
    pub fn distance_between(&self, a: &str, b: &str) -> PyResult<Meters> {
        self.graph.distance_between(a, b).map_err(to_py_err)
    }

    #[getter]
    fn nodes(&self) -> Vec<String> {
        self.graph.nodes().cloned().collect()
    }

    /// Edges as ``(a, b, weight)``, weight is ``None`` for unweighted edges
    #[getter]
    fn edges(&self) -> Vec<(String, String, Option<f64>)> {
        self.graph
            .edges()
            .map(|(a, b, edge)| (a.clone(), b.clone(), edge.weight))
            .collect()
    }

    #[getter]
    fn last_path(&self) -> Vec<String> {
        self.graph.last_path().nodes().to_vec()
    }

    #[getter]
    fn last_path_edges(&self) -> Vec<(String, String)> {
        self.graph.last_path().segments().to_vec()
    }

    /// Graph snapshot as a GeoJSON FeatureCollection string
    pub fn to_geojson(&self) -> PyResult<String> {
        self.graph.to_geojson_string().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "PlacesGraph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

fn edge_row(idx: usize, edge: &Bound<'_, PyTuple>) -> PyResult<(String, String, Option<f64>)> {
    let weight = match edge.len() {
        2 => None,
        3 => Some(edge.get_item(2)?.extract::<f64>()?),
        len => {
            return Err(to_py_err(Error::MalformedEdgeList(format!(
                "edge {idx} has {len} items, expected 2 or 3"
            ))));
        }
    };
    Ok((
        edge.get_item(0)?.extract::<String>()?,
        edge.get_item(1)?.extract::<String>()?,
        weight,
    ))
}

/// Build a complete place graph from a JSON places document
///
/// Parameters
/// ----------
/// path : str
///     JSON file mapping place names to records with ``coordinates: [lat, lon]``
/// distance_weighted : bool, default=True
///     Weight edges by great-circle distance in meters
///
/// Returns
/// -------
/// PlacesGraph
///     Graph with every place as a node and every pair connected
///
/// Raises
/// ------
/// ValueError
///     If the document is missing or malformed
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "load_places_graph")]
#[pyo3(signature = (path, distance_weighted = true))]
pub fn py_load_places_graph(path: &str, distance_weighted: bool) -> PyResult<PyPlacesGraph> {
    let config = PlacesGraphConfig::new(path).distance_weighted(distance_weighted);
    let graph = create_places_graph(&config).map_err(to_py_err)?;
    Ok(PyPlacesGraph { graph })
}
