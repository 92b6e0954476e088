use super::{OsmService, Pause, RetryPolicy};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;

/// Raw Overpass API response
#[derive(Debug, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single element from Overpass, as returned by `out center`
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub center: Option<Center>,
}

/// Center point Overpass computes for a way
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Element {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }
}

/// Overpass QL selecting every named highway way inside a postal-code boundary.
///
/// `out center` makes Overpass attach a center coordinate to each way.
pub fn build_postal_code_query(postal_code: &str, timeout_secs: u64) -> String {
    format!(
        r#"[out:json][timeout:{timeout}];
area
  ["boundary"="postal_code"]
  ["postal_code"="{plz}"]
  -> .searchArea;
(
  way(area.searchArea)[highway][name];
);
out center;"#,
        timeout = timeout_secs,
        plz = postal_code
    )
}

/// Fetch the named roads of one postal code, retrying per `policy`.
///
/// Every failed attempt waits according to the policy before the next one.
/// Once the attempts are used up the result is empty rather than an error,
/// so one bad postal code never aborts the whole run.
pub fn fetch_postal_code_roads(
    service: &dyn OsmService,
    pause: &dyn Pause,
    policy: &RetryPolicy,
    postal_code: &str,
    query_timeout_secs: u64,
) -> OverpassResponse {
    let query = build_postal_code_query(postal_code, query_timeout_secs);

    for attempt in 0..policy.max_attempts {
        match service.interpret(&query) {
            Ok(response) => {
                debug!(
                    "Overpass returned {} elements for PLZ {} (attempt {})",
                    response.elements.len(),
                    postal_code,
                    attempt + 1
                );
                return response;
            }
            Err(e) => {
                let wait = policy.backoff(attempt, e.kind());
                warn!(
                    "Overpass error for PLZ {} (attempt {}/{}): {} -> waiting {}s",
                    postal_code,
                    attempt + 1,
                    policy.max_attempts,
                    e,
                    wait.as_secs_f32()
                );
                pause.pause(wait);
            }
        }
    }

    warn!(
        "Overpass failed for PLZ {} after {} attempts, using empty result",
        postal_code, policy.max_attempts
    );
    OverpassResponse::default()
}
