//! View model for the hospital list next to the map.

use serde::Serialize;
use triage_geo::{Facility, FacilityId};

/// Badge shown when the backend has no distance for a facility.
pub const NEARBY_LABEL: &str = "NEARBY";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRow {
    pub index: usize,
    pub id: FacilityId,
    pub name: String,
    pub address: String,
    /// `★ 4.4`, only for rated facilities.
    pub rating_label: Option<String>,
    pub distance_label: String,
    pub specialist_tag: String,
    pub directions_url: String,
    pub highlighted: bool,
}

impl FacilityRow {
    pub fn new(index: usize, facility: &Facility, selection: Option<usize>) -> Self {
        Self {
            index,
            id: facility.id.clone(),
            name: facility.name.clone(),
            address: facility.address.clone(),
            rating_label: facility.rating.map(|r| format!("★ {r}")),
            distance_label: distance_label(facility.distance_km),
            specialist_tag: facility.specialist.to_uppercase(),
            directions_url: facility.directions_url.to_string(),
            highlighted: selection == Some(index),
        }
    }
}

pub fn distance_label(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(km) => format!("{km} KM"),
        None => NEARBY_LABEL.to_string(),
    }
}

/// Rows for every facility, in result order, including ones the map could
/// not place.
pub fn facility_rows(facilities: &[Facility], selection: Option<usize>) -> Vec<FacilityRow> {
    facilities
        .iter()
        .enumerate()
        .map(|(i, f)| FacilityRow::new(i, f, selection))
        .collect()
}
