//! Non-linear scalar utilities.

use std::f64::consts::PI;

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
/// Convert degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}
