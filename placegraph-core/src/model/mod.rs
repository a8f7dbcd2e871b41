//! Data model of the place graph
//!
//! Places, their coordinates, edge payloads and the graph that ties them together.

pub mod components;
pub mod graph;
pub mod place;

pub use components::{EdgeSpec, PlaceEdge, edge_list_from_rows};
pub use graph::GeoGraph;
pub use place::{Coordinate, CoordinateTable, Place};
