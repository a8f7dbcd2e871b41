use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use log::debug;
use serde_json::json;

use crate::{Error, GeoGraph, PlaceEdge};

impl GeoGraph {
    /// Converts the current graph state to a `GeoJSON` `FeatureCollection`.
    ///
    /// Places become `Point` features and edges `LineString` features. Members
    /// of the last path carry `"on_path": true`. Places without coordinates are
    /// left out together with their edges.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.node_count() + self.edge_count());

        for place in self.nodes() {
            match self.coordinates().get(place) {
                Some(&coordinate) => features.push(create_place_feature(
                    place,
                    Point::from(coordinate),
                    self.last_path().contains_node(place),
                )?),
                None => debug!("Place '{place}' has no coordinates, skipped in export"),
            }
        }

        for (a, b, edge) in self.edges() {
            let (Some(&from), Some(&to)) = (self.coordinates().get(a), self.coordinates().get(b))
            else {
                continue;
            };
            let line = LineString::from(vec![Point::from(from), Point::from(to)]);
            features.push(create_edge_feature(
                a,
                b,
                edge,
                &line,
                self.last_path().contains_segment(a, b),
            )?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJson(e.to_string()))
    }
}

fn create_place_feature(name: &str, point: Point<f64>, on_path: bool) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&point));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "place",
            "name": name,
            "on_path": on_path,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJson(e.to_string()))
}

fn create_edge_feature(
    source: &str,
    target: &str,
    edge: &PlaceEdge,
    line: &LineString<f64>,
    on_path: bool,
) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(line));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "edge",
            "source": source,
            "target": target,
            "weight": edge.weight,
            "on_path": on_path,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJson(e.to_string()))
}
