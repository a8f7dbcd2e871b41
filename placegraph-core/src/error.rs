use thiserror::Error;

use crate::{Place, Weight};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Place '{0}' is not a node of the graph")]
    NodeNotFound(Place),
    #[error("Edge between '{0}' and '{1}' does not exist")]
    EdgeNotFound(Place, Place),
    #[error("No path from '{0}' to '{1}'")]
    NoPathExists(Place, Place),
    #[error("No coordinates recorded for place '{0}'")]
    MissingCoordinate(Place),
    #[error("Malformed edge list: {0}")]
    MalformedEdgeList(String),
    #[error("Invalid weight {weight} for edge between '{source_place}' and '{target_place}'")]
    InvalidWeight {
        source_place: Place,
        target_place: Place,
        weight: Weight,
    },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}
