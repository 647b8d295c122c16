//! Glue between the hospital list and the map.
//!
//! Both views read one [`SelectionStore`]; a list row click and a marker
//! click go through the same `select` call, so they cannot disagree.

use crate::config::MapConfig;
use crate::error::SelectionError;
use crate::render::MapRenderer;
use crate::rows::{facility_rows, FacilityRow};
use crate::scene::{MapEvent, MapScene};
use crate::selection::SelectionStore;
use triage_geo::{Facility, FacilitySet, GeoPoint, HospitalSearchResponse};

#[derive(Debug)]
pub struct MapListBinding {
    facilities: FacilitySet,
    user_location: Option<GeoPoint>,
    renderer: MapRenderer,
    selection: SelectionStore,
}

impl Default for MapListBinding {
    fn default() -> Self {
        Self::from_parts(MapRenderer::default(), SelectionStore::default())
    }
}

impl MapListBinding {
    pub fn new(config: MapConfig) -> crate::Result<Self> {
        Ok(Self::from_parts(
            MapRenderer::new(config)?,
            SelectionStore::default(),
        ))
    }

    /// Builds a binding around an existing store, e.g. one the list view
    /// already holds. The store is reset to an empty result set.
    pub fn from_parts(renderer: MapRenderer, selection: SelectionStore) -> Self {
        let facilities = FacilitySet::empty();
        selection.reset(&facilities);
        Self {
            facilities,
            user_location: None,
            renderer,
            selection,
        }
    }

    /// Handle to the shared selection, for the list collaborator.
    pub fn selection_store(&self) -> SelectionStore {
        self.selection.clone()
    }

    pub fn facilities(&self) -> &FacilitySet {
        &self.facilities
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    pub fn renderer(&self) -> &MapRenderer {
        &self.renderer
    }

    /// Replaces the result set and clears the selection.
    ///
    /// On duplicate ids the previous result set and selection are kept.
    pub fn set_facilities(&mut self, facilities: Vec<Facility>) -> crate::Result<()> {
        let set = FacilitySet::new(facilities)?;
        self.set_facility_set(set);
        Ok(())
    }

    /// Adopts `set`. Handing back the result set already shown keeps the
    /// selection; any other set resets it.
    pub fn set_facility_set(&mut self, set: FacilitySet) {
        if self.facilities.same_result(&set) {
            return;
        }
        self.selection.reset(&set);
        self.facilities = set;
    }

    /// Loads the hospitals of a backend triage response.
    pub fn load_response(&mut self, response: HospitalSearchResponse) -> crate::Result<()> {
        let set = response.into_facility_set()?;
        self.set_facility_set(set);
        Ok(())
    }

    /// Updates the user's position. Selection is left as is.
    pub fn set_user_location(&mut self, location: Option<GeoPoint>) {
        self.user_location = location;
    }

    pub fn click_row(&self, index: usize) -> Result<(), SelectionError> {
        self.select(index)
    }

    pub fn click_marker(&self, index: usize) -> Result<(), SelectionError> {
        self.select(index)
    }

    fn select(&self, index: usize) -> Result<(), SelectionError> {
        if !self.store_in_sync() {
            log::warn!(
                "selection store was reset elsewhere; re-syncing to result set {}",
                self.facilities.generation()
            );
            self.selection.reset(&self.facilities);
        }
        self.selection.select(index)
    }

    /// The shared store may have been reset to another result set by a
    /// different holder; its selection then says nothing about ours.
    fn store_in_sync(&self) -> bool {
        self.selection.snapshot().generation() == self.facilities.generation()
    }

    /// Applies an event coming back from the drawn map.
    ///
    /// Refused gestures leave the view untouched and come back as
    /// [`MapError::View`](crate::MapError::View).
    pub fn handle(&mut self, event: MapEvent) -> crate::Result<()> {
        match event {
            MapEvent::MarkerClicked { index } => self.click_marker(index)?,
            MapEvent::Panned { center } => self.renderer.pan_to(center)?,
            MapEvent::Zoomed { zoom } => self.renderer.zoom_to(zoom)?,
        }
        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.renderer.reset_view();
    }

    /// Selected position in this binding's result set, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let state = self.selection.snapshot();
        if state.generation() != self.facilities.generation() {
            return None;
        }
        state.selected().filter(|&i| i < self.facilities.len())
    }

    pub fn selected_facility(&self) -> Option<&Facility> {
        self.selected_index().and_then(|i| self.facilities.get(i))
    }

    pub fn rows(&self) -> Vec<FacilityRow> {
        facility_rows(&self.facilities, self.selected_index())
    }

    pub fn scene(&self) -> MapScene {
        self.renderer
            .render(&self.facilities, self.user_location, self.selected_index())
    }
}
