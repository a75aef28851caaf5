//! Error types for date handling and offset resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or timezone-offset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a valid calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The IANA timezone name is not in the bundled tz database.
    UnknownTimezone(String),
    /// Local noon does not exist in this zone on this date, so no offset
    /// can be attributed to the date.
    NonexistentLocalTime { zone: String },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::UnknownTimezone(name) => write!(f, "unknown timezone: {name}"),
            Self::NonexistentLocalTime { zone } => {
                write!(f, "local noon does not exist in zone {zone} on this date")
            }
        }
    }
}

impl Error for TimeError {}
