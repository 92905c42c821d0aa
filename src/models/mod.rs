//! Core data models for postal code lookups.

pub mod index;
pub mod lookup;
pub mod record;

pub use index::PostalIndex;
pub use lookup::{LookupError, LookupWarning, Matches};
pub use record::{GeoPoint, PostalRecord};
