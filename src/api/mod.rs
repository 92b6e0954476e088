pub mod client;
pub mod nominatim;
pub mod overpass;
pub mod retry;

#[cfg(test)]
pub(crate) mod testing;

pub use client::HttpOsmClient;
pub use nominatim::{NominatimResult, geocode_address};
pub use overpass::{
    Center, Element, OverpassResponse, build_postal_code_query, fetch_postal_code_roads,
};
pub use retry::{FailureKind, Pause, RetryPolicy, ThreadPause};

use thiserror::Error;

/// Failure of a single call to an external OSM service
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    #[error("service returned error status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::RateLimited => FailureKind::RateLimited,
            _ => FailureKind::Other,
        }
    }
}

/// The external calls the pipeline makes, one method per service.
///
/// [`HttpOsmClient`] talks to the real Nominatim and Overpass endpoints;
/// tests substitute canned responses.
pub trait OsmService {
    /// Nominatim search for a free-text address, single result.
    fn search(&self, address: &str) -> Result<Vec<NominatimResult>, FetchError>;

    /// Run an Overpass QL query.
    fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError>;
}
