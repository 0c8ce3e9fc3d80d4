//! Linear interpolation helpers.

#[inline]
/// Interpolate between `a` and `b`. `t` is not clamped, so values outside
/// `[0, 1]` extrapolate along the same line.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + ((b - a) * t)
}
