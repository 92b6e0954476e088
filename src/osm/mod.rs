pub mod parser;

pub use parser::{parse_road_segment, parse_road_segments};
