//! Declarative description of one map frame.
//!
//! Everything here is derived data: it is rebuilt on every render and never
//! fed back into the core, except through [`MapEvent`]s.

use crate::config::{CircleStyle, LineStyle, MarkerIcon};
use crate::error::MapError;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use triage_geo::{FacilityId, GeoPoint};

/// Browsing context directions links open in.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noreferrer";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub viewport: Viewport,
    pub height_px: u32,
    pub tile_layer: TileLayer,
    pub markers: Vec<FacilityMarker>,
    pub user_marker: Option<UserMarker>,
    pub route: Option<RouteOverlay>,
    /// Facilities left off the map because their coordinates are unusable.
    pub rejected: Vec<RejectedFacility>,
}

impl MapScene {
    #[inline]
    pub fn center(&self) -> GeoPoint {
        self.viewport.center
    }

    /// Marker of the facility at `index` in the result set, if drawn.
    pub fn marker_for(&self, index: usize) -> Option<&FacilityMarker> {
        self.markers.iter().find(|m| m.index == index)
    }

    pub fn selected_marker(&self) -> Option<&FacilityMarker> {
        self.markers.iter().find(|m| m.selected)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(MapError::Serialization)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityMarker {
    /// Position in the facility sequence, shared with the list rows.
    pub index: usize,
    pub id: FacilityId,
    pub position: GeoPoint,
    pub icon: MarkerIcon,
    pub selected: bool,
    pub popup: Popup,
    pub on_click: MapAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    pub title: String,
    pub address: String,
    pub link: Option<DirectionsLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionsLink {
    pub href: String,
    pub label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl DirectionsLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMarker {
    pub position: GeoPoint,
    pub style: CircleStyle,
    pub popup_label: String,
}

/// Straight line from the user to the selected facility.
///
/// A visual cue only, not a road route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOverlay {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub facility_index: usize,
    pub style: LineStyle,
}

impl RouteOverlay {
    pub fn points(&self) -> [GeoPoint; 2] {
        [self.from, self.to]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFacility {
    pub index: usize,
    pub id: FacilityId,
    pub reason: String,
}

/// What the front end should do when a marker is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index")]
pub enum MapAction {
    Select(usize),
}

/// Input coming back from the drawn map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    MarkerClicked { index: usize },
    Panned { center: GeoPoint },
    Zoomed { zoom: f64 },
}

impl From<MapAction> for MapEvent {
    fn from(action: MapAction) -> Self {
        match action {
            MapAction::Select(index) => MapEvent::MarkerClicked { index },
        }
    }
}
