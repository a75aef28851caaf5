//! Per-date UTC-offset resolution.
//!
//! Sunrise/sunset times come out of the solar algorithm in UTC; converting
//! them to wall-clock time needs the offset in effect on that specific
//! date, which across a DST transition differs from the zone's current
//! offset. `TzOffsetResolver` consults the IANA transition table bundled
//! with `chrono-tz`; `FixedOffsetResolver` serves tests and plain-UTC
//! output.

use std::str::FromStr;

use chrono::{Duration, LocalResult, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::civil_date::CivilDate;
use crate::error::TimeError;

/// Resolves the UTC offset (in hours) in effect for a given date.
pub trait UtcOffsetResolver {
    /// Offset in hours, east positive. Fractional for zones like
    /// Asia/Kathmandu (+5.75).
    fn utc_offset_hours(&self, date: &CivilDate) -> Result<f64, TimeError>;
}

/// Offset resolver backed by an IANA timezone's transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzOffsetResolver {
    tz: Tz,
}

impl TzOffsetResolver {
    /// Create a resolver from an IANA zone name, e.g. "Europe/Copenhagen".
    pub fn new(zone: &str) -> Result<Self, TimeError> {
        let tz =
            Tz::from_str(zone).map_err(|_| TimeError::UnknownTimezone(zone.to_string()))?;
        Ok(Self { tz })
    }

    /// Create a resolver from an already-parsed timezone.
    pub fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The IANA name of the resolved zone.
    pub fn zone_name(&self) -> &'static str {
        self.tz.name()
    }
}

impl UtcOffsetResolver for TzOffsetResolver {
    fn utc_offset_hours(&self, date: &CivilDate) -> Result<f64, TimeError> {
        // Resolve at local noon. DST transitions happen in the small hours,
        // so noon carries the offset in effect for the daylight part of the
        // day, which is the one sunrise and sunset should be rendered in.
        let noon = date.naive().and_time(NaiveTime::MIN) + Duration::hours(12);
        match self.tz.from_local_datetime(&noon) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => {
                Ok(f64::from(t.offset().fix().local_minus_utc()) / 3600.0)
            }
            LocalResult::None => Err(TimeError::NonexistentLocalTime {
                zone: self.tz.name().to_string(),
            }),
        }
    }
}

/// Constant-offset resolver; `FixedOffsetResolver(0.0)` yields plain UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffsetResolver(pub f64);

impl UtcOffsetResolver for FixedOffsetResolver {
    fn utc_offset_hours(&self, _date: &CivilDate) -> Result<f64, TimeError> {
        Ok(self.0)
    }
}
