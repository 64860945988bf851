//! Decides when to stop accelerating towards a point.
use crate::vehicle::Kinematics;
use nalgebra::Vector2;

/// Ceiling on the speed used to estimate stopping time, relative to max speed.
pub const SPEED_CEILING_FACTOR: f64 = 1.5;
/// Margin applied to the time spent turning retrograde.
pub const TURN_MARGIN: f64 = 1.1;
pub const HALF_TURN_DEGREES: f64 = 180.0;

/// Distance covered while turning to face retrograde and burning down to a
/// stop from `speed`.
pub fn braking_distance(speed: f64, kinematics: &Kinematics) -> f64 {
    let deceleration = kinematics.deceleration();
    let time = speed.min(SPEED_CEILING_FACTOR * kinematics.max_speed) / deceleration;
    let closing_speed = speed.min(kinematics.max_speed);
    let turn_time = TURN_MARGIN * HALF_TURN_DEGREES / kinematics.turn_rate;
    closing_speed * (time + turn_time) - 0.5 * deceleration * time * time
}

/// Returns true once continuing would overshoot `target`.
///
/// The caller must not pass kinematics with zero thrust, mass or turn rate.
pub fn should_begin_braking(
    position: Vector2<f64>,
    velocity: Vector2<f64>,
    target: Vector2<f64>,
    kinematics: &Kinematics,
) -> bool {
    debug_assert!(kinematics.is_maneuverable(), "{:?}", kinematics);
    let distance = braking_distance(velocity.magnitude(), kinematics);
    distance * distance > (target - position).magnitude_squared()
}
