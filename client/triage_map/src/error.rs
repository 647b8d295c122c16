use thiserror::Error;
use triage_geo::GeoError;

/// A `select` call that named a facility outside the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Selection index {index} out of range for {len} facilities")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid fallback center: {0}")]
    InvalidFallbackCenter(#[source] GeoError),
    #[error("Invalid zoom level {zoom} (allowed {min}..={max})")]
    InvalidZoom { zoom: f64, min: f64, max: f64 },
}

/// A pan or zoom gesture the view refused.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid pan target: {0}")]
    InvalidCenter(#[source] GeoError),
    #[error("Invalid zoom level: {0}")]
    InvalidZoom(f64),
}

/// Errors surfaced by the map core.
#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("Scene serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
