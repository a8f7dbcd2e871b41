//! This module is responsible for reading a places document
//! and building a place graph from it.

mod builder;
mod config;
pub mod places;

pub use builder::create_places_graph;
pub use config::PlacesGraphConfig;
pub use places::{PlaceRecord, PlacesDocument, parse_places};
