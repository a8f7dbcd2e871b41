use std::path::PathBuf;

/// Configuration for building a place graph from a places document
#[derive(Debug, Clone)]
pub struct PlacesGraphConfig {
    /// Path to the JSON document mapping place names to their records
    pub places_path: PathBuf,
    /// Weight edges by great-circle distance instead of leaving them unweighted
    pub distance_weighted: bool,
}

impl PlacesGraphConfig {
    pub fn new(places_path: impl Into<PathBuf>) -> Self {
        Self {
            places_path: places_path.into(),
            distance_weighted: true,
        }
    }

    #[must_use]
    pub fn distance_weighted(mut self, distance_weighted: bool) -> Self {
        self.distance_weighted = distance_weighted;
        self
    }
}
