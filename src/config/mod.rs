use crate::api::RetryPolicy;
use crate::domain::Coordinate;
use anyhow::{Result, bail};
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_NAME: &str = "plz-streets";

fn default_shop_address() -> String {
    "Berliner Straße 9, 13507 Berlin, Germany".to_string()
}
fn default_fallback() -> Coordinate {
    // Tegel, close to the shop
    Coordinate::new(52.5865, 13.2862)
}
fn default_radius_km() -> f64 {
    8.0
}
fn default_postal_codes() -> Vec<String> {
    [
        "13507", "13509", "13437", "13467", "13469", "13503", "13505", "13403", "13405",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_output() -> PathBuf {
    PathBuf::from("app/data/streets.json")
}
fn default_user_agent() -> String {
    "BurgerBrothers-StreetBuilder/1.0 (contact: youremail@example.com)".to_string()
}
fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}
fn default_geocode_timeout_secs() -> u64 {
    20
}
fn default_postal_code_pause_ms() -> u64 {
    1500
}

/// Run configuration, read from `plz-streets.toml` when present
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_shop_address")]
    pub shop_address: String,
    /// Used when geocoding the shop address fails
    #[serde(default = "default_fallback")]
    pub fallback: Coordinate,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    /// Postal codes in output order
    #[serde(default = "default_postal_codes")]
    pub postal_codes: Vec<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    #[serde(default = "default_geocode_timeout_secs")]
    pub geocode_timeout_secs: u64,
    /// Courtesy delay after each postal code
    #[serde(default = "default_postal_code_pause_ms")]
    pub postal_code_pause_ms: u64,
    #[serde(default)]
    pub overpass: OverpassConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop_address: default_shop_address(),
            fallback: default_fallback(),
            radius_km: default_radius_km(),
            postal_codes: default_postal_codes(),
            output: default_output(),
            user_agent: default_user_agent(),
            nominatim_url: default_nominatim_url(),
            geocode_timeout_secs: default_geocode_timeout_secs(),
            postal_code_pause_ms: default_postal_code_pause_ms(),
            overpass: OverpassConfig::default(),
        }
    }
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout_secs() -> u64 {
    180
}

fn default_query_timeout_secs() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    3
}

fn default_rate_limit_backoff_secs() -> u64 {
    5
}

fn default_error_backoff_secs() -> u64 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    /// HTTP timeout for one request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Server-side `[timeout:N]` in the query
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_rate_limit_backoff_secs")]
    pub rate_limit_backoff_secs: u64,
    #[serde(default = "default_error_backoff_secs")]
    pub error_backoff_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_timeout_secs(),
            query_timeout_secs: default_query_timeout_secs(),
            max_attempts: default_max_attempts(),
            rate_limit_backoff_secs: default_rate_limit_backoff_secs(),
            error_backoff_secs: default_error_backoff_secs(),
        }
    }
}

impl OverpassConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            rate_limit_step: Duration::from_secs(self.rate_limit_backoff_secs),
            error_step: Duration::from_secs(self.error_backoff_secs),
        }
    }
}

impl Config {
    /// Load the first parseable config file from the search paths, or the defaults.
    pub fn load() -> Self {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        debug!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            bail!("radius_km must be a non-negative number, got {}", self.radius_km);
        }
        if self.postal_codes.is_empty() {
            bail!("postal_codes must not be empty");
        }
        if self.overpass.max_attempts == 0 {
            bail!("overpass.max_attempts must be at least 1");
        }
        Ok(())
    }

    pub fn postal_code_pause(&self) -> Duration {
        Duration::from_millis(self.postal_code_pause_ms)
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("{CONFIG_NAME}.toml")));
    paths.push(PathBuf::from(format!(".{CONFIG_NAME}.toml")));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_NAME).join("config.toml"));
        paths.push(config_dir.join(format!("{CONFIG_NAME}.toml")));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.toml")));
        paths.push(home.join(".config").join(CONFIG_NAME).join("config.toml"));
    }

    paths
}
