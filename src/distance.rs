//! Great-circle distance on a spherical earth.
//!
//! All distances go through [`distance_between_points`], a haversine
//! implementation rounded to two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in miles.
///
/// Kept at the dataset's historical value; it is not exactly
/// `EARTH_RADIUS_KM` converted to miles.
pub const EARTH_RADIUS_MI: f64 = 3958.0;

/// Distance unit used by the query operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl Unit {
    /// Earth radius expressed in this unit
    pub fn earth_radius(self) -> f64 {
        match self {
            Unit::Kilometers => EARTH_RADIUS_KM,
            Unit::Miles => EARTH_RADIUS_MI,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown unit '{0}', expected 'km' or 'mi'")]
pub struct ParseUnitError(String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "km" | "kilometers" => Ok(Unit::Kilometers),
            "mi" | "miles" => Ok(Unit::Miles),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Haversine distance between two lat/lon points (degrees) on a sphere
/// of the given radius, rounded to two decimal places.
pub fn distance_between_points(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    // rounding can push a just past 1 for antipodal points
    let a = (hav(lat2 - lat1) + lat1.cos() * lat2.cos() * hav(lon2 - lon1)).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_hundredths(c * radius)
}

/// sin²(θ/2)
fn hav(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}

// f64::round rounds half away from zero
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_pairs() {
        // Berlin -> Düsseldorf
        assert_eq!(
            distance_between_points(52.520008, 13.404954, 51.217941, 6.761680, EARTH_RADIUS_KM),
            478.34
        );
        // New York -> Madrid
        assert_eq!(
            distance_between_points(40.730610, -73.935242, 40.416775, -3.703790, EARTH_RADIUS_KM),
            5761.76
        );
        // Bangkok -> Chiang Mai
        assert_eq!(
            distance_between_points(13.736717, 100.523186, 18.796143, 98.979263, EARTH_RADIUS_KM),
            586.21
        );
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(
            distance_between_points(51.4167, 13.9333, 51.4167, 13.9333, EARTH_RADIUS_KM),
            0.0
        );
    }

    #[test]
    fn test_symmetric() {
        let ab = distance_between_points(53.5336, 9.9855, 47.8656, 10.154, EARTH_RADIUS_MI);
        let ba = distance_between_points(47.8656, 10.154, 53.5336, 9.9855, EARTH_RADIUS_MI);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_small_offset_rounds_to_hundredths() {
        assert_eq!(
            distance_between_points(51.4167, 13.9333, 51.4267, 13.9333, EARTH_RADIUS_KM),
            1.11
        );
        assert_eq!(
            distance_between_points(51.4167, 13.9333, 51.4267, 13.9333, EARTH_RADIUS_MI),
            0.69
        );
    }

    #[test]
    fn test_antipodal_points() {
        // half the circumference: pi * 6371
        for lat in -45i32..=45 {
            let lat = f64::from(lat);
            let d = distance_between_points(lat, 0.0, -lat, 180.0, EARTH_RADIUS_KM);
            assert_eq!(d, 20015.09, "lat {}", lat);
        }
    }

    #[test]
    fn test_unit_radius() {
        assert_eq!(Unit::Kilometers.earth_radius(), EARTH_RADIUS_KM);
        assert_eq!(Unit::Miles.earth_radius(), EARTH_RADIUS_MI);
        assert_eq!(Unit::default(), Unit::Kilometers);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("km".parse::<Unit>().unwrap(), Unit::Kilometers);
        assert_eq!("MI".parse::<Unit>().unwrap(), Unit::Miles);
        assert_eq!("miles".parse::<Unit>().unwrap(), Unit::Miles);
        assert!("furlongs".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Kilometers.to_string(), "km");
        assert_eq!(Unit::Miles.to_string(), "mi");
    }
}
