//! Per-tick maneuvers: fly at a point, or burn retrograde to a stop.
//!
//! Both are pure functions of the vehicle snapshot. They request a bearing
//! and decide whether the engine should be lit; turning itself is left to the
//! simulation.
use crate::command::{Command, Directives};
use crate::config::AutonavConfig;
use crate::math::{angle_diff, heading_of, PI, TAU};
use crate::predictor::should_begin_braking;
use crate::vehicle::VehicleState;
use nalgebra::Vector2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Actuation {
    pub completed: bool,
    pub directives: Directives,
}

/// Only thrust while facing within `min_dir_err` of the bearing.
fn gate_thrust(
    vehicle: &VehicleState,
    facing_error: f64,
    config: &AutonavConfig,
) -> Option<f64> {
    if facing_error.abs() < config.min_dir_err {
        (vehicle.acceleration < 1.0).then_some(1.0)
    } else {
        (vehicle.acceleration > 0.0).then_some(0.0)
    }
}

/// Turns towards `target` and thrusts when aligned. Completes when the
/// vehicle should start braking to avoid overshooting.
pub fn approach(
    vehicle: &VehicleState,
    target: Vector2<f64>,
    config: &AutonavConfig,
) -> Actuation {
    let mut directives = Directives::new();
    let offset = target - vehicle.position;
    let on_target = offset.magnitude_squared() == 0.0;

    let mut thrust = if on_target {
        (vehicle.acceleration > 0.0).then_some(0.0)
    } else {
        let bearing = heading_of(offset);
        directives.push(Command::Face(bearing));
        gate_thrust(vehicle, angle_diff(vehicle.heading, bearing), config)
    };

    let completed = on_target
        || should_begin_braking(
            vehicle.position,
            vehicle.velocity,
            target,
            &vehicle.kinematics,
        );
    if completed {
        thrust = Some(0.0);
    }
    if let Some(level) = thrust {
        directives.push(Command::SetAcceleration(level));
    }

    Actuation {
        completed,
        directives,
    }
}

/// Faces against the velocity vector and thrusts when aligned. Completes once
/// speed drops under `min_vel_err`.
pub fn brake(vehicle: &VehicleState, config: &AutonavConfig) -> Actuation {
    let mut directives = Directives::new();
    if vehicle.speed() < config.min_vel_err {
        directives.push(Command::SetAcceleration(0.0));
        return Actuation {
            completed: true,
            directives,
        };
    }

    let retrograde = (heading_of(vehicle.velocity) + PI).rem_euclid(TAU);
    directives.push(Command::Face(retrograde));
    if let Some(level) = gate_thrust(vehicle, angle_diff(vehicle.heading, retrograde), config) {
        directives.push(Command::SetAcceleration(level));
    }

    Actuation {
        completed: false,
        directives,
    }
}
