use std::{fs::File, io::BufReader};

use log::info;

use super::{PlacesGraphConfig, parse_places};
use crate::{Error, GeoGraph};

/// Creates a complete place graph from the configured places document
///
/// Every place becomes a node and every pair of places is connected, weighted
/// by great-circle distance when `distance_weighted` is set.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed, or if a place
/// lacks coordinates needed for weighting.
pub fn create_places_graph(config: &PlacesGraphConfig) -> Result<GeoGraph, Error> {
    validate_config(config)?;

    info!("Reading places from {}", config.places_path.display());
    let file = File::open(&config.places_path)?;
    let document = parse_places(BufReader::new(file))?;
    info!("Read {} places", document.places.len());

    let mut graph = GeoGraph::new(document.places, document.coordinates);
    graph.add_all_nodes();
    graph.connect_all_pairs(config.distance_weighted)?;

    info!(
        "Place graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn validate_config(config: &PlacesGraphConfig) -> Result<(), Error> {
    if !config.places_path.is_file() {
        return Err(Error::InvalidData(format!(
            "Places document not found: {}",
            config.places_path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_reported() {
        let config = PlacesGraphConfig::new("/nonexistent/places.json");
        let result = create_places_graph(&config);
        assert!(
            matches!(result, Err(Error::InvalidData(msg)) if msg.contains("/nonexistent/places.json"))
        );
    }
}
