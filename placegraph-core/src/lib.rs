//! Weighted place graph with great-circle edge weights and shortest-path search.
//!
//! The central type is [`GeoGraph`]: it owns a set of named places, an
//! undirected weighted edge set and the last computed shortest path.

pub mod error;
pub mod export;
pub mod geodesy;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use geodesy::{EARTH_RADIUS_METERS, great_circle_distance};
pub use loading::{PlacesGraphConfig, create_places_graph};
pub use model::{Coordinate, CoordinateTable, EdgeSpec, GeoGraph, Place, PlaceEdge};
pub use routing::{SearchMetric, ShortestPath};

/// Great-circle distance in whole meters
pub type Meters = u32;

/// Edge weight as stored on the graph
pub type Weight = f64;

/// Cost of an edge that carries no explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;
