use placegraph_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;

/// Great-circle distance between two points in whole meters
///
/// Parameters
/// ----------
/// lat1, lon1 : float
///     First point in decimal degrees
/// lat2, lon2 : float
///     Second point in decimal degrees
///
/// Returns
/// -------
/// int
///     Distance on a sphere of radius 6372795 m, truncated toward zero
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Meters {
    placegraph_core::great_circle_distance(
        Coordinate::new(lat1, lon1),
        Coordinate::new(lat2, lon2),
    )
}
