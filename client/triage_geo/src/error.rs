use thiserror::Error;

/// Errors raised while building or decoding location data.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),
    #[error("Longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),
    #[error("Duplicate facility id in result set: {0}")]
    DuplicateFacility(String),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
