use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A WGS84 coordinate pair in decimal degrees.
///
/// Points built with [`GeoPoint::new`] are always in range. Points that come
/// in through deserialization are not checked until [`GeoPoint::validate`] is
/// called, because backend data is allowed to be wrong and the map has to
/// survive it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_geo::GeoPoint;
    ///
    /// let p = GeoPoint::new(12.9716, 77.5946).unwrap();
    /// assert_eq!(p.latitude, 12.9716);
    /// assert!(GeoPoint::new(200.0, 77.5946).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(GeoError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite()
            || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
        {
            return Err(GeoError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `[lat, lon]` pair, the order map widgets expect.
    #[inline]
    pub fn to_lat_lon(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
