// Re-export key components
pub use crate::error::Error;
pub use crate::geodesy::{EARTH_RADIUS_METERS, great_circle_distance};
pub use crate::loading::{PlacesDocument, PlacesGraphConfig, create_places_graph, parse_places};
pub use crate::model::{
    Coordinate, CoordinateTable, EdgeSpec, GeoGraph, Place, PlaceEdge, edge_list_from_rows,
};
pub use crate::routing::{SearchMetric, ShortestPath};

// Core scalar types
pub use crate::DEFAULT_WEIGHT;
pub use crate::Meters;
pub use crate::Weight;
