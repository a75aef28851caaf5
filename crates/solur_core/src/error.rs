//! Error types for solar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use solur_time::TimeError;

/// Errors from the sunrise/sunset calculation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
    /// The sun stays below the requested zenith all day (polar night).
    NeverRises,
    /// The sun stays above the requested zenith all day (midnight sun).
    NeverSets,
    /// Date validation or timezone-offset lookup failed.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NeverRises => write!(f, "sun never rises at this latitude on this date"),
            Self::NeverSets => write!(f, "sun never sets at this latitude on this date"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SolarError {}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
