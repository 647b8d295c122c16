//! Presentation settings for the facility map.
//!
//! Every field has a default matching the stock triage client, so an empty
//! JSON object (`{}`) is a complete config.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use triage_geo::GeoPoint;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 22.0;

/// Bengaluru city center, used when neither the user nor any facility has a
/// position.
pub const DEFAULT_FALLBACK_CENTER: GeoPoint = GeoPoint {
    latitude: 12.9716,
    longitude: 77.5946,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub fallback_center: GeoPoint,
    pub zoom: f64,
    pub height_px: u32,
    pub tile_layer: TileLayerConfig,
    pub facility_icon: MarkerIcon,
    pub user_marker: CircleStyle,
    pub user_marker_label: String,
    pub route_line: LineStyle,
    pub directions_label: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_center: DEFAULT_FALLBACK_CENTER,
            zoom: 13.0,
            height_px: 300,
            tile_layer: TileLayerConfig::default(),
            facility_icon: MarkerIcon::default(),
            user_marker: CircleStyle::default(),
            user_marker_label: "Your location".to_string(),
            route_line: LineStyle::default(),
            directions_label: "Open directions".to_string(),
        }
    }
}

impl MapConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fallback_center
            .validate()
            .map_err(ConfigError::InvalidFallbackCenter)?;
        if !self.zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::InvalidZoom {
                zoom: self.zoom,
                min: MIN_ZOOM,
                max: MAX_ZOOM,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    /// Slippy-map URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        }
    }
}

/// Pin icon used for facility markers. Sizes and anchors are in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
    pub icon_size: [i32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            icon_url: "marker-icon.png".to_string(),
            icon_retina_url: "marker-icon-2x.png".to_string(),
            shadow_url: "marker-shadow.png".to_string(),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

/// Filled circle used for the user's own position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: 6.0,
            color: "#1f8ef1".to_string(),
            fill_color: "#1f8ef1".to_string(),
            fill_opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "red".to_string(),
            weight: 3.0,
        }
    }
}
