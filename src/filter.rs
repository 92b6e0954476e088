use crate::api::Element;
use crate::domain::{Coordinate, normalize_street_name};
use crate::geometry::haversine_km;
use crate::osm::parse_road_segment;
use std::collections::BTreeSet;

/// Street names of one postal code that lie within the radius
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilteredStreets {
    /// Unique normalized names, sorted
    pub names: Vec<String>,
    /// Ways within the radius, counted before deduplication
    pub kept_ways: usize,
}

/// Keep the names of named ways whose center lies within `radius_km` of `shop`.
///
/// The radius is inclusive.
pub fn filter_streets(shop: Coordinate, radius_km: f64, elements: &[Element]) -> FilteredStreets {
    let mut names = BTreeSet::new();
    let mut kept_ways = 0;

    for segment in elements.iter().filter_map(parse_road_segment) {
        if haversine_km(shop, segment.center) <= radius_km {
            names.insert(normalize_street_name(&segment.name));
            kept_ways += 1;
        }
    }

    FilteredStreets {
        names: names.into_iter().collect(),
        kept_ways,
    }
}
