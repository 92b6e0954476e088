use super::Coordinate;

/// A named road way with the center point reported by Overpass
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    /// Raw `name` tag, not yet normalized
    pub name: String,
    pub center: Coordinate,
}

impl RoadSegment {
    pub fn new(name: impl Into<String>, center: Coordinate) -> Self {
        Self {
            name: name.into(),
            center,
        }
    }
}
