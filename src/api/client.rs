use super::{FetchError, NominatimResult, OsmService, OverpassResponse};
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// Blocking HTTP client for Nominatim and Overpass
pub struct HttpOsmClient {
    client: Client,
    nominatim_url: String,
    overpass_url: String,
    geocode_timeout: Duration,
    overpass_timeout: Duration,
}

impl HttpOsmClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            nominatim_url: config.nominatim_url.clone(),
            overpass_url: config.overpass.url.clone(),
            geocode_timeout: Duration::from_secs(config.geocode_timeout_secs),
            overpass_timeout: Duration::from_secs(config.overpass.timeout_secs),
        })
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
        status if !status.is_success() => Err(FetchError::Status(status.as_u16())),
        _ => Ok(response),
    }
}

impl OsmService for HttpOsmClient {
    fn search(&self, address: &str) -> Result<Vec<NominatimResult>, FetchError> {
        let response = self
            .client
            .get(&self.nominatim_url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .timeout(self.geocode_timeout)
            .send()?;

        Ok(check_status(response)?.json()?)
    }

    fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError> {
        // Overpass expects form-encoded POST data: data=<query>
        let response = self
            .client
            .post(&self.overpass_url)
            .form(&[("data", query)])
            .timeout(self.overpass_timeout)
            .send()?;

        Ok(check_status(response)?.json()?)
    }
}
