//! JSON shapes produced by the triage backend's hospital search.
//!
//! The backend answers a triage request with
//! `{ "triage": {..}, "hospitals": [..], "latency_ms": 12.3 }`. Only the
//! hospital list matters to the map; the triage block is kept opaque.

use crate::error::GeoError;
use crate::facility::{Facility, FacilityId, FacilitySet};
use crate::point::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Address shown when the search provider had none.
pub const UNKNOWN_ADDRESS: &str = "Nearby";

/// Name shown when the search provider had none.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub maps_url: String,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub available_specialist: String,
}

impl HospitalRecord {
    /// Converts the record at `position` in the response into a [`Facility`].
    ///
    /// The backend writes `0` for an unknown rating or distance, so zero maps
    /// to `None`. Records carry no key of their own; the id falls back to the
    /// 1-based position (`h1`, `h2`, ...).
    pub fn into_facility(self, position: usize) -> Facility {
        let id = match self.id {
            Some(id) if !id.is_empty() => FacilityId::new(id),
            _ => FacilityId::new(format!("h{}", position + 1)),
        };
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let address = self
            .address
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string());
        let location = GeoPoint {
            latitude: self.lat,
            longitude: self.lon,
        };
        if !location.is_valid() {
            log::debug!("hospital record {id} carries out-of-range coordinates {location}");
        }

        Facility::new(id, name, location)
            .with_address(address)
            .with_rating(Some(self.rating).filter(|r| *r > 0.0))
            .with_distance_km(Some(self.distance_km).filter(|d| *d > 0.0))
            .with_specialist(self.available_specialist)
            .with_directions_url(self.maps_url)
    }
}

/// Full body of `/api/hospitals/nearby` and `/api/mental-health/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalSearchResponse {
    #[serde(default)]
    pub triage: JsonValue,
    #[serde(default)]
    pub hospitals: Vec<HospitalRecord>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

impl HospitalSearchResponse {
    pub fn from_json(json: &str) -> Result<Self, GeoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hospitals in backend order, ready for the map.
    pub fn facilities(&self) -> Vec<Facility> {
        self.hospitals
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, r)| r.into_facility(i))
            .collect()
    }

    pub fn into_facility_set(self) -> Result<FacilitySet, GeoError> {
        FacilitySet::new(self.facilities())
    }
}

/// Browser geolocation as the client forwards it: `{ "lat": .., "lon": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocationRecord {
    pub lat: f64,
    pub lon: f64,
}

impl UserLocationRecord {
    pub fn to_point(self) -> Result<GeoPoint, GeoError> {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESPONSE: &str = r#"{
        "triage": {"urgency": "Moderate", "specialist": "Cardiologist"},
        "hospitals": [
            {"name": "Apollo", "lat": 12.97, "lon": 77.59, "address": "MG Road",
             "rating": 4.4, "maps_url": "https://maps.example/apollo",
             "distance_km": 1.25, "available_specialist": "Cardiologist"},
            {"name": "Clinic", "lat": 12.98, "lon": 77.60, "rating": 0.0,
             "maps_url": "https://maps.example/clinic", "distance_km": 0,
             "available_specialist": "Cardiologist"}
        ],
        "latency_ms": 84.5
    }"#;

    #[test]
    fn decodes_backend_response() {
        let response = HospitalSearchResponse::from_json(RESPONSE).unwrap();
        assert_eq!(response.latency_ms, Some(84.5));
        assert_eq!(response.triage["specialist"], "Cardiologist");

        let facilities = response.facilities();
        assert_eq!(facilities.len(), 2);

        let apollo = &facilities[0];
        assert_eq!(apollo.id.as_str(), "h1");
        assert_eq!(apollo.address, "MG Road");
        assert_eq!(apollo.rating, Some(4.4));
        assert_eq!(apollo.distance_km, Some(1.25));
        assert_eq!(apollo.directions_url.as_str(), "https://maps.example/apollo");

        let clinic = &facilities[1];
        assert_eq!(clinic.id.as_str(), "h2");
        assert_eq!(clinic.address, UNKNOWN_ADDRESS);
        assert_eq!(clinic.rating, None);
        assert_eq!(clinic.distance_km, None);
    }

    #[test]
    fn explicit_ids_win_over_position() {
        let record: HospitalRecord =
            serde_json::from_str(r#"{"id": "osm-42", "lat": 1.0, "lon": 2.0}"#).unwrap();
        let facility = record.into_facility(7);
        assert_eq!(facility.id.as_str(), "osm-42");
        assert_eq!(facility.name, UNKNOWN_NAME);
    }

    #[test]
    fn out_of_range_records_still_decode() {
        let record: HospitalRecord =
            serde_json::from_str(r#"{"name": "Broken", "lat": 200.0, "lon": 77.6}"#).unwrap();
        let facility = record.into_facility(0);
        assert!(!facility.has_valid_location());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = HospitalSearchResponse::from_json("{not json").unwrap_err();
        assert!(matches!(err, GeoError::Decode(_)));
    }

    #[test]
    fn user_location_is_validated() {
        let ok = UserLocationRecord { lat: 12.96, lon: 77.58 }.to_point().unwrap();
        assert_eq!(ok.to_lat_lon(), [12.96, 77.58]);
        assert!(UserLocationRecord { lat: 0.0, lon: 500.0 }.to_point().is_err());
    }
}
