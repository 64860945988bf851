use nalgebra::Vector2;
pub use std::f64::consts::{PI, TAU};

/// Returns the smallest rotation between angles `a` and `b`.
///
/// A positive result is a counter-clockwise rotation and negative is clockwise.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let c = (b - a).rem_euclid(TAU);
    if c > PI {
        c - TAU
    } else {
        c
    }
}

/// Returns the angle of the vector in `[0, TAU)`.
pub fn heading_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x).rem_euclid(TAU)
}

/// Bearing from `from` towards `to`.
pub fn bearing(from: Vector2<f64>, to: Vector2<f64>) -> f64 {
    heading_of(to - from)
}
