use super::{FetchError, OsmService};
use crate::domain::Coordinate;
use log::{info, warn};
use serde::Deserialize;

/// A single Nominatim search hit.
///
/// Nominatim sends `lat`/`lon` as strings; some mirrors send numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimResult {
    pub lat: Degrees,
    pub lon: Degrees,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    pub fn value(&self) -> Result<f64, FetchError> {
        match self {
            Degrees::Number(v) => Ok(*v),
            Degrees::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| FetchError::Decode(format!("invalid coordinate value: {s:?}"))),
        }
    }
}

impl NominatimResult {
    pub fn coordinate(&self) -> Result<Coordinate, FetchError> {
        Ok(Coordinate::new(self.lat.value()?, self.lon.value()?))
    }
}

/// Geocode an address to coordinates, never failing.
///
/// A single Nominatim lookup is made. Any failure (transport error, error
/// status, empty result, unparsable coordinates) falls back to `fallback`.
pub fn geocode_address(
    service: &dyn OsmService,
    address: &str,
    fallback: Coordinate,
) -> Coordinate {
    let first = service
        .search(address)
        .and_then(|results| results.into_iter().next().map(|r| r.coordinate()).transpose());

    match first {
        Ok(Some(coord)) => {
            info!("Found coordinates for '{}': {}", address, coord);
            coord
        }
        Ok(None) => {
            warn!("No result from Nominatim for '{}', using fallback", address);
            fallback
        }
        Err(e) => {
            warn!("Nominatim failed: {}. Using fallback", e);
            fallback
        }
    }
}
