use crate::api::{Element, OverpassResponse};
use crate::domain::{Coordinate, RoadSegment};
use log::trace;

/// Turn a raw Overpass element into a usable road segment.
///
/// Only ways with a non-empty `name` tag and a complete center qualify.
/// Ways without a center are dropped; no centroid is derived from nodes.
pub fn parse_road_segment(element: &Element) -> Option<RoadSegment> {
    if element.type_ != "way" {
        return None;
    }

    let name = element.tag("name").filter(|n| !n.is_empty())?;

    let center = match element.center {
        Some(c) => c,
        None => {
            trace!("Way {:?} ('{}') has no center, skipping", element.id, name);
            return None;
        }
    };
    let (lat, lon) = (center.lat?, center.lon?);

    Some(RoadSegment::new(name, Coordinate::new(lat, lon)))
}

/// Parse an Overpass response into road segments, skipping unusable elements
pub fn parse_road_segments(response: &OverpassResponse) -> Vec<RoadSegment> {
    response
        .elements
        .iter()
        .filter_map(parse_road_segment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> OverpassResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_named_way_with_center() {
        let r = response(
            r#"{"elements":[{"type":"way","id":7,"center":{"lat":52.59,"lon":13.29},"tags":{"highway":"residential","name":"Veitstraße"}}]}"#,
        );
        let segments = parse_road_segments(&r);
        assert_eq!(
            segments,
            vec![RoadSegment::new("Veitstraße", Coordinate::new(52.59, 13.29))]
        );
    }

    #[test]
    fn test_skips_unusable_elements() {
        let r = response(
            r#"{"elements":[
                {"type":"node","id":1,"center":{"lat":52.5,"lon":13.2},"tags":{"name":"Knoten"}},
                {"type":"way","id":2,"center":{"lat":52.5,"lon":13.2},"tags":{"highway":"service"}},
                {"type":"way","id":3,"center":{"lat":52.5,"lon":13.2},"tags":{"name":""}},
                {"type":"way","id":4,"tags":{"name":"Ohne Zentrum"}},
                {"type":"way","id":5,"center":{"lon":13.2},"tags":{"name":"Halbes Zentrum"}},
                {"type":"way","id":6,"center":{"lat":52.5,"lon":13.2}},
                {"type":"way","id":7,"center":{"lat":52.5,"lon":13.2},"tags":{"name":"Gorkistraße"}}
            ]}"#,
        );
        let segments = parse_road_segments(&r);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].name, "Gorkistraße");
    }
}
