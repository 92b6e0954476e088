use crate::domain::Coordinate;
use geo::{Distance, Haversine};

/// Mean Earth radius used by `geo`'s haversine, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometers
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    Haversine::distance(a.to_point(), b.to_point()) / 1000.0
}
