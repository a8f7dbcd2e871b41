//! Places and their geographic coordinates

use geo::Point;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Unique name of a location, used as the node identifier
pub type Place = String;

/// Lookup table from place name to its coordinates
pub type CoordinateTable = HashMap<Place, Coordinate>;

/// Latitude/longitude pair in decimal degrees.
///
/// Serialized as a two-element array `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lat, value.lon]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lon, value.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_lat_lon_array() {
        let coordinate: Coordinate = serde_json::from_str("[55.7558, 37.6173]").unwrap();
        assert_eq!(coordinate, Coordinate::new(55.7558, 37.6173));
        assert_eq!(serde_json::to_string(&coordinate).unwrap(), "[55.7558,37.6173]");
    }

    #[test]
    fn point_is_lon_lat() {
        let point = Point::from(Coordinate::new(10.0, 20.0));
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
    }
}
