//! Great-circle distance between two coordinates on a spherical Earth.

use crate::{Meters, model::Coordinate};

/// Sphere radius used for every distance in the crate
pub const EARTH_RADIUS_METERS: f64 = 6_372_795.0;

/// Great-circle distance between two coordinates in whole meters.
///
/// The central angle is taken with `atan2` over the spherical law of cosines,
/// which stays accurate both for very close points and for near-antipodal ones.
/// The result is truncated toward zero. Out-of-range coordinates are not
/// rejected and simply yield a meaningless distance.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn great_circle_distance(from: Coordinate, to: Coordinate) -> Meters {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta = (to.lon - from.lon).to_radians();

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let y = ((cos_lat2 * sin_delta).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta).powi(2))
    .sqrt();
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta;

    // `as` saturates, NaN becomes 0
    (y.atan2(x) * EARTH_RADIUS_METERS) as Meters
}
