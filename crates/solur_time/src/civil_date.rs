//! Validated civil calendar dates.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// A civil calendar date (proleptic Gregorian).
///
/// Construction validates the (year, month, day) triple, so a held value
/// is always a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    naive: NaiveDate,
}

impl CivilDate {
    /// Create a date, rejecting impossible calendar triples
    /// (month 13, February 30, non-leap February 29, ...).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(naive) => Ok(Self { naive }),
            None => Err(TimeError::InvalidDate { year, month, day }),
        }
    }

    /// Wrap an already-validated `chrono` date.
    pub fn from_naive(naive: NaiveDate) -> Self {
        Self { naive }
    }

    pub fn year(&self) -> i32 {
        self.naive.year()
    }

    pub fn month(&self) -> u32 {
        self.naive.month()
    }

    pub fn day(&self) -> u32 {
        self.naive.day()
    }

    /// 1-based ordinal day of the year (1..=366).
    pub fn day_of_year(&self) -> u32 {
        self.naive.ordinal()
    }

    /// The underlying `chrono` date, for weekday/arithmetic at the caller.
    pub fn naive(&self) -> NaiveDate {
        self.naive
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}
