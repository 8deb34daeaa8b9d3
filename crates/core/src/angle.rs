//! Angle units.
//!
//! Curves that are parameterized in degrees convert through [`deg_to_rad`]
//! and nowhere else.

use std::f64::consts::{PI, TAU};

/// One full revolution in radians.
pub const FULL_TURN: f64 = TAU;

/// Converts degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}
