//! Places document: `{ "<place>": { "coordinates": [lat, lon], ... }, ... }`

use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Coordinate, CoordinateTable, Error, Place};

/// Per-place record of the document. Fields other than the coordinates are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    #[serde(alias = "Координаты")]
    pub coordinates: Coordinate,
}

/// Places in document order together with their coordinates
#[derive(Debug, Clone, Default)]
pub struct PlacesDocument {
    pub places: Vec<Place>,
    pub coordinates: CoordinateTable,
}

/// Parses a places document, keeping places in document order.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the document is not valid JSON or a record
/// lacks well-formed coordinates.
pub fn parse_places<R: Read>(reader: R) -> Result<PlacesDocument, Error> {
    let records: IndexMap<Place, PlaceRecord> = serde_json::from_reader(reader)
        .map_err(|e| Error::InvalidData(format!("Malformed places document: {e}")))?;

    let coordinates = records
        .iter()
        .map(|(place, record)| (place.clone(), record.coordinates))
        .collect();
    let places = records.into_keys().collect();

    Ok(PlacesDocument {
        places,
        coordinates,
    })
}
