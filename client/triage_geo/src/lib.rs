//! Location and facility model for the triage client.
//!
//! Facilities arrive from the hospital-search backend already ranked and with
//! distances computed; this crate only describes them and checks that their
//! coordinates are usable on a map.

pub mod error;
pub mod facility;
pub mod point;
pub mod wire;

pub use error::GeoError;
pub use facility::{DirectionsUrl, Facility, FacilityId, FacilitySet};
pub use point::GeoPoint;
pub use wire::{HospitalRecord, HospitalSearchResponse, UserLocationRecord};
