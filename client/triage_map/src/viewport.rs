use crate::config::{MAX_ZOOM, MIN_ZOOM};
use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use triage_geo::GeoPoint;

/// What part of the world the map shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: clamp_zoom(zoom),
        }
    }
}

pub(crate) fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        MIN_ZOOM
    }
}

/// View position owned by the user's gestures.
///
/// Until the user pans or zooms, the map follows the computed center. After
/// that, selections and new data leave the view alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ViewState {
    center: Option<GeoPoint>,
    zoom: Option<f64>,
}

impl ViewState {
    pub(crate) fn pan_to(&mut self, center: GeoPoint) -> Result<(), ViewError> {
        if let Err(err) = center.validate() {
            log::warn!("ignoring pan to invalid center {center}: {err}");
            return Err(ViewError::InvalidCenter(err));
        }
        self.center = Some(center);
        Ok(())
    }

    /// Finite levels are clamped to the allowed range; NaN and infinities are
    /// refused and leave the view as it was.
    pub(crate) fn zoom_to(&mut self, zoom: f64) -> Result<(), ViewError> {
        if !zoom.is_finite() {
            log::warn!("ignoring non-finite zoom {zoom}");
            return Err(ViewError::InvalidZoom(zoom));
        }
        self.zoom = Some(clamp_zoom(zoom));
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn is_user_controlled(&self) -> bool {
        self.center.is_some() || self.zoom.is_some()
    }

    pub(crate) fn resolve(&self, computed_center: GeoPoint, default_zoom: f64) -> Viewport {
        Viewport::new(
            self.center.unwrap_or(computed_center),
            self.zoom.unwrap_or(default_zoom),
        )
    }
}
