//! Postal record as read from a GeoNames postal code export.

use serde::{Deserialize, Serialize};

use crate::distance::{distance_between_points, EARTH_RADIUS_KM, EARTH_RADIUS_MI};

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One line of the dataset.
///
/// The country column is consumed by the loader's country filter and is
/// not stored on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalRecord {
    /// Postal code, may contain letters
    pub code: String,
    pub place_name: String,
    /// GeoNames admin name 1 (state, Bundesland, ...)
    pub admin_name: String,
    /// GeoNames admin code 1
    pub state_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PostalRecord {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    /// Distance to another record on a sphere of the given radius
    pub fn distance(&self, other: &PostalRecord, radius: f64) -> f64 {
        self.distance_to(other.latitude, other.longitude, radius)
    }

    /// Distance to an arbitrary point on a sphere of the given radius
    pub fn distance_to(&self, latitude: f64, longitude: f64, radius: f64) -> f64 {
        distance_between_points(self.latitude, self.longitude, latitude, longitude, radius)
    }

    pub fn distance_km(&self, other: &PostalRecord) -> f64 {
        self.distance(other, EARTH_RADIUS_KM)
    }

    pub fn distance_mi(&self, other: &PostalRecord) -> f64 {
        self.distance(other, EARTH_RADIUS_MI)
    }

    pub fn distance_km_to(&self, latitude: f64, longitude: f64) -> f64 {
        self.distance_to(latitude, longitude, EARTH_RADIUS_KM)
    }

    pub fn distance_mi_to(&self, latitude: f64, longitude: f64) -> f64 {
        self.distance_to(latitude, longitude, EARTH_RADIUS_MI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, latitude: f64, longitude: f64) -> PostalRecord {
        PostalRecord {
            code: code.to_string(),
            place_name: String::new(),
            admin_name: String::new(),
            state_code: String::new(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_distance_between_records() {
        let guteborn = record("01945", 51.4167, 13.9333);
        let neuhausen = record("03058", 51.7298, 14.45);

        assert_eq!(guteborn.distance_km(&neuhausen), 49.87);
        assert_eq!(guteborn.distance_mi(&neuhausen), 30.98);
        assert_eq!(neuhausen.distance_km(&guteborn), 49.87);
    }

    #[test]
    fn test_distance_to_point() {
        let guteborn = record("01945", 51.4167, 13.9333);

        assert_eq!(guteborn.distance_km_to(51.4267, 13.9333), 1.11);
        assert_eq!(guteborn.distance_km_to(51.4067, 13.9333), 1.11);
        assert_eq!(guteborn.distance_mi_to(51.4267, 13.9333), 0.69);
        assert_eq!(guteborn.distance_mi_to(51.4067, 13.9333), 0.69);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let hamburg = record("20457", 53.5336, 9.9855);
        assert_eq!(hamburg.distance_km(&hamburg), 0.0);
        assert_eq!(hamburg.distance_mi(&hamburg), 0.0);
    }

    #[test]
    fn test_point() {
        let hamburg = record("20457", 53.5336, 9.9855);
        assert_eq!(
            hamburg.point(),
            GeoPoint {
                lat: 53.5336,
                lon: 9.9855
            }
        );
    }
}
