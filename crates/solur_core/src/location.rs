//! Geographic location of the observer.

use crate::error::SolarError;

/// An observer location in decimal degrees, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Location {
    /// Create a location. Latitude must be within [-90, 90] and longitude
    /// within [-180, 180], both finite; anything else fails fast rather
    /// than feeding NaN into the trigonometry downstream.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLocation(
                "latitude must be a finite value in [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLocation(
                "longitude must be a finite value in [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}
