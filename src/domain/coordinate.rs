use geo::Point;
use serde::Deserialize;

/// A WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to a `geo` point (x = lon, y = lat)
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_axis_order() {
        let p = Coordinate::new(52.5865, 13.2862).to_point();
        assert_eq!(p.x(), 13.2862);
        assert_eq!(p.y(), 52.5865);
    }

    #[test]
    fn test_display_six_decimals() {
        let c = Coordinate::from((52.5, 13.25));
        assert_eq!(c.to_string(), "52.500000, 13.250000");
    }
}
