use crate::api::{OsmService, Pause, fetch_postal_code_roads, geocode_address};
use crate::config::Config;
use crate::domain::Coordinate;
use crate::filter::filter_streets;
use crate::output::write_street_index;
use anyhow::Result;
use indicatif::ProgressBar;
use log::info;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Postal code to sorted street names, in the order postal codes were inserted
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StreetIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl StreetIndex {
    /// Insert or replace the list for a postal code. A replaced entry keeps its position.
    pub fn insert(&mut self, postal_code: impl Into<String>, names: Vec<String>) {
        let postal_code = postal_code.into();
        match self.entries.iter_mut().find(|(plz, _)| *plz == postal_code) {
            Some(entry) => entry.1 = names,
            None => self.entries.push((postal_code, names)),
        }
    }

    pub fn get(&self, postal_code: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(plz, _)| plz == postal_code)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(plz, names)| (plz.as_str(), names.as_slice()))
    }

    /// Number of postal codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Street names summed over all postal codes
    pub fn total_streets(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }
}

impl Serialize for StreetIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (plz, names) in &self.entries {
            map.serialize_entry(plz, names)?;
        }
        map.end()
    }
}

/// Drives geocoding, per-postal-code queries, filtering and output
pub struct Pipeline<'a> {
    config: &'a Config,
    service: &'a dyn OsmService,
    pause: &'a dyn Pause,
    progress: ProgressBar,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, service: &'a dyn OsmService, pause: &'a dyn Pause) -> Self {
        Self {
            config,
            service,
            pause,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report progress per postal code on `progress`
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Resolve the shop coordinate, falling back to the configured one
    pub fn locate_shop(&self) -> Coordinate {
        geocode_address(self.service, &self.config.shop_address, self.config.fallback)
    }

    /// Query and filter every configured postal code around `shop`.
    ///
    /// A postal code whose query failed ends up with an empty list.
    pub fn build_streets(&self, shop: Coordinate) -> StreetIndex {
        let policy = self.config.overpass.retry_policy();
        let mut index = StreetIndex::default();

        self.progress.set_length(self.config.postal_codes.len() as u64);

        for plz in &self.config.postal_codes {
            self.progress.set_message(format!("PLZ {plz}"));

            let response = fetch_postal_code_roads(
                self.service,
                self.pause,
                &policy,
                plz,
                self.config.overpass.query_timeout_secs,
            );
            info!("{} ways fetched for PLZ {}", response.elements.len(), plz);

            let filtered = filter_streets(shop, self.config.radius_km, &response.elements);
            info!(
                "PLZ {}: kept {} street ways within {} km; unique names: {}",
                plz,
                filtered.kept_ways,
                self.config.radius_km,
                filtered.names.len()
            );
            index.insert(plz.as_str(), filtered.names);

            self.progress.inc(1);
            self.pause.pause(self.config.postal_code_pause());
        }

        self.progress.finish_and_clear();
        index
    }

    /// Full run: geocode, build the index and write it to the output path
    pub fn run(&self) -> Result<StreetIndex> {
        let shop = self.locate_shop();
        info!("Using shop coordinates: {}", shop);

        let index = self.build_streets(shop);
        write_street_index(self.config.output_path(), &index)?;

        Ok(index)
    }
}
