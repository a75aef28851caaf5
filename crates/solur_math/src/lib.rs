//! Degree-based trigonometry and range normalization.
//!
//! The published sunrise/sunset equations are written in degrees, not
//! radians. This crate wraps the radian primitives so the algorithm body
//! reads like the source equations, and provides the wraparound helpers
//! used between algorithm steps.

pub mod degree;
pub mod wrap;

pub use degree::{acos_deg, asin_deg, atan_deg, cos_deg, sin_deg, tan_deg};
pub use wrap::{normalize_24, normalize_360};
