//! Postcodes - in-memory GeoNames postal code lookup
//!
//! Loads a GeoNames postal code export once and answers lookups,
//! distance and radius queries against it.

pub mod distance;
pub mod loader;
pub mod models;

pub use distance::{distance_between_points, Unit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use loader::{CountryScan, LoadError, LoadOptions};
pub use models::{GeoPoint, LookupError, LookupWarning, Matches, PostalIndex, PostalRecord};
