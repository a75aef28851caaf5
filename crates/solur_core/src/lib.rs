//! Sunrise/sunset computation from a location and a calendar date.
//!
//! This crate provides:
//! - `Location`, validated geographic coordinates
//! - The solar-position algorithm producing event times as fractional
//!   local hours
//! - `SolarError`, typed failures including the polar day/night cases
//!
//! Times come out in fractional hours since local midnight, normalized to
//! [0, 24); render them with `solur_time::HourMinute`.

pub mod error;
pub mod location;
pub mod solar;

pub use error::SolarError;
pub use location::Location;
pub use solar::{SolarEvent, ZENITH_DEG, event_local_hours, sunrise, sunset};
