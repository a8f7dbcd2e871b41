//! Snapshot export of the place graph for renderers

mod to_geojson;
