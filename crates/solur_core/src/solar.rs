//! The sunrise/sunset algorithm.
//!
//! Williams' solar-position approximation (Almanac for Computers, 1990):
//! mean anomaly → true longitude → right ascension → declination → hour
//! angle, all in degrees, then conversion to UTC and to local wall-clock
//! hours via a per-date offset lookup. Accurate to within a couple of
//! minutes of official tables.
//!
//! The equations are numerically sensitive and order-dependent; the step
//! structure below mirrors the published algorithm and should not be
//! rearranged.

use solur_math::{
    acos_deg, asin_deg, atan_deg, cos_deg, normalize_24, normalize_360, sin_deg, tan_deg,
};
use solur_time::{CivilDate, UtcOffsetResolver};

use crate::error::SolarError;
use crate::location::Location;

/// Zenith angle defining sunrise/sunset: the sun's center 0.833 degrees
/// below the geometric horizon, accounting for atmospheric refraction
/// (~34') and the solar semidiameter (~16').
pub const ZENITH_DEG: f64 = 90.833;

/// Degrees of Earth rotation per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// The two horizon-crossing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Rough local hour at which the sun approaches the event, seeding the
    /// day-fraction estimate: 6h for rising, 18h for setting.
    fn approach_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }

    /// Whether this is the rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Local fractional hour of sunrise on the given date.
pub fn sunrise(
    location: &Location,
    date: &CivilDate,
    resolver: &impl UtcOffsetResolver,
) -> Result<f64, SolarError> {
    event_local_hours(location, date, SolarEvent::Sunrise, resolver)
}

/// Local fractional hour of sunset on the given date.
pub fn sunset(
    location: &Location,
    date: &CivilDate,
    resolver: &impl UtcOffsetResolver,
) -> Result<f64, SolarError> {
    event_local_hours(location, date, SolarEvent::Sunset, resolver)
}

/// Local fractional hour of the given event, normalized to [0, 24).
///
/// Pure apart from the offset lookup; repeated calls with the same inputs
/// yield the same result.
///
/// # Errors
/// * `SolarError::NeverRises` / `NeverSets` when the sun does not reach
///   the zenith angle on this date at this latitude (polar night /
///   midnight sun)
/// * `SolarError::Time` when the offset lookup fails
pub fn event_local_hours(
    location: &Location,
    date: &CivilDate,
    event: SolarEvent,
    resolver: &impl UtcOffsetResolver,
) -> Result<f64, SolarError> {
    let lat = location.latitude_deg();

    // Step 1: ordinal day of the year.
    let n = f64::from(date.day_of_year());

    // Step 2: longitude in hour units, and the seed estimate of the
    // event's fractional day.
    let lng_hour = location.longitude_deg() / DEGREES_PER_HOUR;
    let t = n + ((event.approach_hour() - lng_hour) / 24.0);

    // Step 3: sun's mean anomaly.
    let m = 0.9856 * t - 3.289;

    // Step 4: sun's true longitude.
    let l = normalize_360(m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634);

    // Step 5: sun's right ascension, shifted into the same quadrant as L,
    // then converted to hours.
    let ra = normalize_360(atan_deg(0.91764 * tan_deg(l)));
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra_hours = (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR;

    // Step 6: sun's declination.
    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    // Step 7: cosine of the sun's local hour angle at the zenith crossing.
    // Outside [-1, 1] the crossing never happens on this date; report that
    // instead of handing acos an out-of-domain argument.
    let cos_h = (cos_deg(ZENITH_DEG) - sin_dec * sin_deg(lat)) / (cos_dec * cos_deg(lat));
    if cos_h > 1.0 {
        return Err(SolarError::NeverRises);
    }
    if cos_h < -1.0 {
        return Err(SolarError::NeverSets);
    }

    // Step 8: hour angle, measured westward for rising events, in hours.
    let h_deg = if event.is_rising() {
        360.0 - acos_deg(cos_h)
    } else {
        acos_deg(cos_h)
    };
    let h = h_deg / DEGREES_PER_HOUR;

    // Step 9: local mean time of the event.
    let t_event = h + ra_hours - 0.06571 * t - 6.622;

    // Step 10: back to UTC.
    let ut = normalize_24(t_event - lng_hour);

    // Step 11: apply the offset in effect on this date.
    let offset = resolver.utc_offset_hours(date)?;
    Ok(normalize_24(ut + offset))
}
