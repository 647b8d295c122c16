use crate::error::GeoError;
use crate::point::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque key of a facility, unique within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FacilityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// External directions link supplied by the search backend.
///
/// Passed through untouched; the map never builds one itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionsUrl(String);

impl DirectionsUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DirectionsUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate healthcare location returned by the hospital search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
    /// `None` when the facility has no rating.
    pub rating: Option<f64>,
    /// `None` when the backend could not tell the distance.
    pub distance_km: Option<f64>,
    pub specialist: String,
    pub directions_url: DirectionsUrl,
}

impl Facility {
    pub fn new(id: impl Into<FacilityId>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            location,
            rating: None,
            distance_km: None,
            specialist: String::new(),
            directions_url: DirectionsUrl::default(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Negative or non-finite ratings are dropped.
    pub fn with_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating.filter(|r| r.is_finite() && *r >= 0.0);
        self
    }

    /// Negative or non-finite distances are dropped.
    pub fn with_distance_km(mut self, distance_km: Option<f64>) -> Self {
        self.distance_km = distance_km.filter(|d| d.is_finite() && *d >= 0.0);
        self
    }

    pub fn with_specialist(mut self, specialist: impl Into<String>) -> Self {
        self.specialist = specialist.into();
        self
    }

    pub fn with_directions_url(mut self, url: impl Into<String>) -> Self {
        self.directions_url = DirectionsUrl::new(url);
        self
    }

    /// Whether the facility can be placed on the map.
    pub fn has_valid_location(&self) -> bool {
        self.location.is_valid()
    }
}

impl From<String> for FacilityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// One complete, ordered search result.
///
/// Cheap to clone; every clone shares the same facilities and the same
/// generation. A freshly built set always gets a new generation, even when its
/// contents equal the previous one, since a new search run is a new result.
#[derive(Debug, Clone)]
pub struct FacilitySet {
    facilities: Rc<[Facility]>,
    generation: u64,
}

impl FacilitySet {
    /// Builds a set, rejecting duplicate identifiers.
    ///
    /// Facilities with bad coordinates are kept: they still belong to the
    /// list, the map simply leaves them out.
    pub fn new(facilities: Vec<Facility>) -> Result<Self, GeoError> {
        let mut seen = HashSet::with_capacity(facilities.len());
        for facility in &facilities {
            if !seen.insert(facility.id.as_str()) {
                return Err(GeoError::DuplicateFacility(facility.id.to_string()));
            }
        }
        Ok(Self {
            facilities: facilities.into(),
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        })
    }

    pub fn empty() -> Self {
        Self {
            facilities: Rc::from(Vec::new()),
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Facilities in upstream ranking order.
    #[inline]
    pub fn as_slice(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn position(&self, id: &FacilityId) -> Option<usize> {
        self.facilities.iter().position(|f| &f.id == id)
    }

    /// First facility that can actually be drawn.
    pub fn first_valid(&self) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.has_valid_location())
    }

    /// True if both handles come from the same search result.
    pub fn same_result(&self, other: &FacilitySet) -> bool {
        self.generation == other.generation
    }
}

impl Default for FacilitySet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for FacilitySet {
    type Target = [Facility];

    fn deref(&self) -> &Self::Target {
        &self.facilities
    }
}

impl<'a> IntoIterator for &'a FacilitySet {
    type Item = &'a Facility;
    type IntoIter = std::slice::Iter<'a, Facility>;

    fn into_iter(self) -> Self::IntoIter {
        self.facilities.iter()
    }
}
