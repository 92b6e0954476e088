pub mod coordinate;
pub mod road;
pub mod street;

pub use coordinate::Coordinate;
pub use road::RoadSegment;
pub use street::normalize_street_name;
