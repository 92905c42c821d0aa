//! In-memory postal code index and the queries that run against it.

use hashbrown::HashMap;
use tracing::debug;

use super::{LookupError, Matches, PostalRecord};
use crate::distance::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};

/// Loaded dataset: postal code -> records in dataset order.
///
/// Built once by the loader and never modified afterwards, so shared
/// references can be handed to any number of readers.
#[derive(Debug, Clone, Default)]
pub struct PostalIndex {
    records: HashMap<String, Vec<PostalRecord>>,
    record_count: usize,
}

impl PostalIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a record under its code
    pub(crate) fn insert(&mut self, record: PostalRecord) {
        self.records
            .entry(record.code.clone())
            .or_default()
            .push(record);
        self.record_count += 1;
    }

    /// Exact, case-sensitive lookup of a postal code
    pub fn lookup(&self, code: &str) -> Result<Matches<'_>, LookupError> {
        let (code, records) =
            self.records
                .get_key_value(code)
                .ok_or_else(|| LookupError::NotFound {
                    code: code.to_string(),
                })?;

        let matches = Matches::new(code, records);
        if matches.is_ambiguous() {
            debug!("Postal code {} has {} locations", code, matches.len());
        }
        Ok(matches)
    }

    /// Codes of every record closer than `max_distance` to `origin`,
    /// measured on a sphere of `earth_radius`.
    ///
    /// Records sharing the origin's code are skipped. The result follows
    /// map iteration order and is not deduplicated.
    pub fn within_radius(
        &self,
        origin: &PostalRecord,
        max_distance: f64,
        earth_radius: f64,
    ) -> Vec<&str> {
        self.records()
            .filter(|record| record.code != origin.code)
            .filter(|record| origin.distance(record, earth_radius) < max_distance)
            .map(|record| record.code.as_str())
            .collect()
    }

    pub fn within_km_radius(&self, origin: &PostalRecord, max_km: f64) -> Vec<&str> {
        self.within_radius(origin, max_km, EARTH_RADIUS_KM)
    }

    pub fn within_mi_radius(&self, origin: &PostalRecord, max_mi: f64) -> Vec<&str> {
        self.within_radius(origin, max_mi, EARTH_RADIUS_MI)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Number of distinct postal codes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of records across all codes
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Iterate over every record of every code
    pub fn records(&self) -> impl Iterator<Item = &PostalRecord> {
        self.records.values().flatten()
    }
}
