//! Turns `(facilities, user location, selection)` into a [`MapScene`].

use crate::config::{LineStyle, MapConfig};
use crate::error::{ConfigError, ViewError};
use crate::scene::{
    DirectionsLink, FacilityMarker, MapAction, MapScene, Popup, RejectedFacility, RouteOverlay,
    TileLayer, UserMarker,
};
use crate::viewport::{ViewState, Viewport};
use triage_geo::{Facility, FacilitySet, GeoPoint};

/// Where the map opens: the user, else the first facility that can be drawn,
/// else `fallback`.
pub fn initial_center(
    user_location: Option<GeoPoint>,
    facilities: &FacilitySet,
    fallback: GeoPoint,
) -> GeoPoint {
    if let Some(user) = user_location.filter(GeoPoint::is_valid) {
        return user;
    }
    facilities
        .first_valid()
        .map(|f| f.location)
        .unwrap_or(fallback)
}

/// Line from the user to the selected facility.
///
/// `None` unless there is a user position, a selection, and the selected
/// facility has drawable coordinates.
pub fn route_overlay(
    user_location: Option<GeoPoint>,
    facilities: &[Facility],
    selection: Option<usize>,
    style: &LineStyle,
) -> Option<RouteOverlay> {
    let from = user_location.filter(GeoPoint::is_valid)?;
    let index = selection?;
    let facility = facilities.get(index)?;
    if !facility.has_valid_location() {
        log::warn!(
            "no route to facility {} ({}): invalid location {}",
            index,
            facility.id,
            facility.location
        );
        return None;
    }
    Some(RouteOverlay {
        from,
        to: facility.location,
        facility_index: index,
        style: style.clone(),
    })
}

/// Map renderer.
///
/// Holds the presentation config and the gesture-controlled view; everything
/// else is recomputed from its inputs on each [`render`](Self::render).
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    config: MapConfig,
    view: ViewState,
}

impl MapRenderer {
    pub fn new(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            view: ViewState::default(),
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Keeps the user's pan across later renders.
    pub fn pan_to(&mut self, center: GeoPoint) -> Result<(), ViewError> {
        self.view.pan_to(center)
    }

    pub fn zoom_to(&mut self, zoom: f64) -> Result<(), ViewError> {
        self.view.zoom_to(zoom)
    }

    /// Hands the view back to the computed center and default zoom.
    pub fn reset_view(&mut self) {
        self.view.clear();
    }

    pub fn is_view_user_controlled(&self) -> bool {
        self.view.is_user_controlled()
    }

    pub fn viewport(&self, facilities: &FacilitySet, user_location: Option<GeoPoint>) -> Viewport {
        let center = initial_center(user_location, facilities, self.config.fallback_center);
        self.view.resolve(center, self.config.zoom)
    }

    pub fn render(
        &self,
        facilities: &FacilitySet,
        user_location: Option<GeoPoint>,
        selection: Option<usize>,
    ) -> MapScene {
        let user_location = user_location.filter(|p| match p.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("ignoring user location {p}: {err}");
                false
            }
        });

        let mut markers = Vec::with_capacity(facilities.len());
        let mut rejected = Vec::new();
        for (index, facility) in facilities.iter().enumerate() {
            match facility.location.validate() {
                Ok(()) => markers.push(self.facility_marker(index, facility, selection)),
                Err(err) => {
                    log::warn!(
                        "leaving facility {} ({}) off the map: {}",
                        index,
                        facility.id,
                        err
                    );
                    rejected.push(RejectedFacility {
                        index,
                        id: facility.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let user_marker = user_location.map(|position| UserMarker {
            position,
            style: self.config.user_marker.clone(),
            popup_label: self.config.user_marker_label.clone(),
        });

        let route = route_overlay(
            user_location,
            facilities,
            selection,
            &self.config.route_line,
        );

        log::debug!(
            "rendered {} markers ({} rejected), user marker: {}, route: {}",
            markers.len(),
            rejected.len(),
            user_marker.is_some(),
            route.is_some()
        );

        MapScene {
            viewport: self.viewport(facilities, user_location),
            height_px: self.config.height_px,
            tile_layer: TileLayer {
                url_template: self.config.tile_layer.url_template.clone(),
            },
            markers,
            user_marker,
            route,
            rejected,
        }
    }

    fn facility_marker(
        &self,
        index: usize,
        facility: &Facility,
        selection: Option<usize>,
    ) -> FacilityMarker {
        let link = (!facility.directions_url.is_empty()).then(|| {
            DirectionsLink::new(
                facility.directions_url.as_str(),
                self.config.directions_label.as_str(),
            )
        });
        FacilityMarker {
            index,
            id: facility.id.clone(),
            position: facility.location,
            icon: self.config.facility_icon.clone(),
            selected: selection == Some(index),
            popup: Popup {
                title: facility.name.clone(),
                address: facility.address.clone(),
                link,
            },
            on_click: MapAction::Select(index),
        }
    }
}
