//! Civil dates, UTC-offset resolution, and wall-clock formatting.
//!
//! This crate provides:
//! - `CivilDate`, a validated calendar date with day-of-year
//! - `UtcOffsetResolver`, the per-date timezone offset lookup backed by
//!   the IANA transition table (via `chrono-tz`)
//! - `HourMinute`, the fractional-hour → `HH:MM` formatter

pub mod civil_date;
pub mod error;
pub mod hour_minute;
pub mod offset;

pub use civil_date::CivilDate;
pub use error::TimeError;
pub use hour_minute::{HourMinute, format_hours};
pub use offset::{FixedOffsetResolver, TzOffsetResolver, UtcOffsetResolver};
